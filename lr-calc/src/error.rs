use thiserror::Error;

use crate::tokenizer::Op;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Neither an integer nor an operator. Reported, never fatal.
    #[error("error in input: '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },
    #[error("division by zero: {lhs} / 0")]
    DivisionByZero { lhs: i64 },
    #[error("malformed expression at position {position}: {reason}")]
    MalformedExpression {
        position: usize,
        reason: &'static str,
    },
    #[error("empty expression")]
    EmptyExpression,
}

impl CalcError {
    pub(crate) fn missing_operand(op: Op, position: usize) -> Self {
        let reason = match op {
            Op::Add => "'+' is missing an operand",
            Op::Sub => "'-' is missing an operand",
            Op::Mul => "'*' is missing an operand",
            Op::Div => "'/' is missing an operand",
        };
        CalcError::MalformedExpression { position, reason }
    }
}
