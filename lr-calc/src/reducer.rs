use std::ops::RangeInclusive;

use tracing::debug;

use crate::config::Notation;
use crate::error::CalcError;
use crate::tokenizer::Token;

/// A token together with its position in the input line.
pub type Positioned = (usize, Token);

/// Collapses a token sequence one operator at a time, always picking the
/// leftmost operator. There is no precedence.
///
/// Errors carry input positions, not indices into the shrinking sequence.
/// A reduced number takes the position of its left operand.
pub struct Reducer {
    notation: Notation,
}

impl Reducer {
    pub fn new(notation: Notation) -> Self {
        Self { notation }
    }

    /// Window of the leftmost operator sitting at index `at`, together with
    /// the indices of its left and right operands.
    fn window(
        &self,
        len: usize,
        at: usize,
    ) -> Option<(RangeInclusive<usize>, usize, usize)> {
        match self.notation {
            Notation::Postfix if at >= 2 => Some((at - 2..=at, at - 2, at - 1)),
            Notation::Infix if at >= 1 && at + 1 < len => Some((at - 1..=at + 1, at - 1, at + 1)),
            _ => None,
        }
    }

    /// Performs a single reduction step.
    ///
    /// Returns `Ok(false)` without touching `tokens` when there is nothing
    /// left to reduce. Every successful step shrinks `tokens` by exactly two.
    pub fn step(&self, tokens: &mut Vec<Positioned>) -> Result<bool, CalcError> {
        if tokens.len() <= 1 {
            return Ok(false);
        }

        let found = tokens
            .iter()
            .enumerate()
            .find_map(|(at, (position, token))| match token {
                Token::Operator(op) => Some((at, *position, *op)),
                _ => None,
            });
        let Some((at, position, op)) = found else {
            return Err(CalcError::MalformedExpression {
                position: tokens[tokens.len() - 1].0,
                reason: "operands left without an operator",
            });
        };

        let Some((window, lhs_at, rhs_at)) = self.window(tokens.len(), at) else {
            return Err(CalcError::missing_operand(op, position));
        };
        let (lhs_position, lhs, rhs) = match (&tokens[lhs_at], &tokens[rhs_at]) {
            ((lhs_position, Token::Number(lhs)), (_, Token::Number(rhs))) => {
                (*lhs_position, *lhs, *rhs)
            }
            _ => return Err(CalcError::missing_operand(op, position)),
        };

        let result = op.apply(lhs, rhs)?;
        debug!(lhs, %op, rhs, result, position, "reduce");

        tokens.splice(window, std::iter::once((lhs_position, Token::Number(result))));
        Ok(true)
    }

    /// Reduces `tokens` until a single number remains and returns it.
    pub fn reduce(&self, mut tokens: Vec<Positioned>) -> Result<i64, CalcError> {
        if tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        while self.step(&mut tokens)? {}

        match &tokens[0] {
            (_, Token::Number(result)) => Ok(*result),
            (position, Token::Operator(op)) => Err(CalcError::missing_operand(*op, *position)),
            (position, Token::Invalid(_)) => Err(CalcError::MalformedExpression {
                position: *position,
                reason: "no valid operand",
            }),
        }
    }
}
