use tracing::{debug, warn};

use crate::error::CalcError;
use crate::reducer::Positioned;

/// Textual replacements applied to every raw token before it is classified.
const SUBSTITUTIONS: [(&str, &str); 1] = [("e", "3.14")];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn from_symbol(symbol: &str) -> Option<Op> {
        match symbol {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Applies the operator to `lhs` and `rhs`, in that order.
    ///
    /// Overflow wraps. Division truncates toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, CalcError> {
        match self {
            Op::Add => Ok(lhs.wrapping_add(rhs)),
            Op::Sub => Ok(lhs.wrapping_sub(rhs)),
            Op::Mul => Ok(lhs.wrapping_mul(rhs)),
            Op::Div if rhs == 0 => Err(CalcError::DivisionByZero { lhs }),
            Op::Div => Ok(lhs.wrapping_div(rhs)),
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Number,
    Operator,
    Invalid,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Number(i64),
    Operator(Op),
    Invalid(String),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Operator(_) => TokenKind::Operator,
            Token::Invalid(_) => TokenKind::Invalid,
        }
    }
}

/// Splits `line` on runs of whitespace.
pub fn split(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

pub fn substitute(raw: &str) -> &str {
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == raw)
        .map_or(raw, |&(_, to)| to)
}

/// Classifies a single raw token. Never fails: anything that is neither a
/// base-10 integer nor one of `+ - * /` becomes [`Token::Invalid`].
pub fn classify(raw: &str) -> Token {
    // Operators first, so a lone sign is never mistaken for a number.
    if let Some(op) = Op::from_symbol(raw) {
        return Token::Operator(op);
    }

    match raw.parse::<i64>() {
        Ok(num) => Token::Number(num),
        Err(_) => Token::Invalid(raw.to_string()),
    }
}

#[derive(Default)]
pub struct Tokenizer {
    diagnostics: Vec<CalcError>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct TokenizedInput(pub Vec<Token>);

impl std::ops::Deref for TokenizedInput {
    type Target = Vec<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for TokenizedInput {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl TokenizedInput {
    /// Drops invalid tokens, leaving the sequence the reducer works on.
    /// Each token keeps its position in the input line.
    pub fn into_reducible(self) -> Vec<Positioned> {
        self.0
            .into_iter()
            .enumerate()
            .filter(|(_, token)| token.kind() != TokenKind::Invalid)
            .collect()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Invalid tokens seen so far, in input order. Leaves the list empty.
    pub fn take_diagnostics(&mut self) -> Vec<CalcError> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn tokenize(&mut self, input: &str) -> TokenizedInput {
        let mut tokens = Vec::new();

        for (position, raw) in split(input).enumerate() {
            let token = classify(substitute(raw));
            debug!(position, raw, ?token, "classified token");

            if let Token::Invalid(text) = &token {
                warn!(position, token = %text, "invalid token");
                self.diagnostics.push(CalcError::InvalidToken {
                    token: text.clone(),
                    position,
                });
            }

            tokens.push(token);
        }

        TokenizedInput(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("  12 +\t-3   * 4 / +5 - "),
            TokenizedInput(vec![
                Token::Number(12),
                Token::Operator(Op::Add),
                Token::Number(-3),
                Token::Operator(Op::Mul),
                Token::Number(4),
                Token::Operator(Op::Div),
                Token::Number(5),
                Token::Operator(Op::Sub),
            ])
        );
        assert!(tokenizer.take_diagnostics().is_empty());
    }

    #[test]
    fn test_split_blank_line() {
        assert_eq!(split("").count(), 0);
        assert_eq!(split(" \t  ").count(), 0);
    }

    #[test]
    fn test_substitute_e() {
        assert_eq!(substitute("e"), "3.14");
        assert_eq!(substitute("ee"), "ee");
        assert_eq!(substitute("E"), "E");
        assert_eq!(substitute("7"), "7");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("42").kind(), TokenKind::Number);
        assert_eq!(classify("-42"), Token::Number(-42));
        assert_eq!(classify("/"), Token::Operator(Op::Div));
        assert_eq!(classify("3.14").kind(), TokenKind::Invalid);
        assert_eq!(classify("++").kind(), TokenKind::Invalid);
        assert_eq!(classify("").kind(), TokenKind::Invalid);
        assert_eq!(
            classify("99999999999999999999"),
            Token::Invalid("99999999999999999999".to_string())
        );
    }

    #[test]
    fn test_tokenizer_reports_invalid_tokens() {
        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("1 e + x 2");
        assert_eq!(tokens.len(), 5);
        assert_eq!(
            tokenizer.take_diagnostics(),
            vec![
                CalcError::InvalidToken {
                    token: "3.14".to_string(),
                    position: 1
                },
                CalcError::InvalidToken {
                    token: "x".to_string(),
                    position: 3
                },
            ]
        );
        assert_eq!(
            tokens.into_reducible(),
            vec![
                (0, Token::Number(1)),
                (2, Token::Operator(Op::Add)),
                (4, Token::Number(2)),
            ]
        );
        assert!(tokenizer.take_diagnostics().is_empty());
    }

    #[test]
    fn test_op_apply() {
        assert_eq!(Op::Add.apply(2, 3), Ok(5));
        assert_eq!(Op::Sub.apply(2, 3), Ok(-1));
        assert_eq!(Op::Mul.apply(-2, 3), Ok(-6));
        assert_eq!(Op::Div.apply(7, 2), Ok(3));
        assert_eq!(Op::Div.apply(-7, 2), Ok(-3));
        assert_eq!(
            Op::Div.apply(6, 0),
            Err(CalcError::DivisionByZero { lhs: 6 })
        );
        assert_eq!(Op::Add.apply(i64::MAX, 1), Ok(i64::MIN));
        assert_eq!(Op::Div.apply(i64::MIN, -1), Ok(i64::MIN));
    }
}
