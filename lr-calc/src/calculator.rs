use tracing::{debug, info};

use crate::config::Config;
use crate::error::CalcError;
use crate::reducer::Reducer;
use crate::tokenizer::Tokenizer;

#[derive(Debug, PartialEq)]
pub struct Evaluation {
    pub result: Result<i64, CalcError>,
    /// Invalid tokens that were skipped, in input order.
    pub diagnostics: Vec<CalcError>,
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The line was the sentinel. Nothing was tokenized.
    Sentinel,
    Evaluated(Evaluation),
}

pub struct Calculator {
    config: Config,
}

impl Calculator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn is_sentinel(&self, line: &str) -> bool {
        line.trim_end_matches(['\r', '\n']) == self.config.sentinel
    }

    pub fn evaluate_line(&self, line: &str) -> Outcome {
        if self.is_sentinel(line) {
            info!(sentinel = %self.config.sentinel, "sentinel line");
            return Outcome::Sentinel;
        }

        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize(line);
        debug!(count = tokens.len(), "tokenized line");

        let result = Reducer::new(self.config.notation).reduce(tokens.into_reducible());

        Outcome::Evaluated(Evaluation {
            result,
            diagnostics: tokenizer.take_diagnostics(),
        })
    }

    /// Evaluates `expr`, ignoring the sentinel and dropping invalid tokens
    /// silently.
    pub fn evaluate(&self, expr: &str) -> Result<i64, CalcError> {
        let tokens = Tokenizer::new().tokenize(expr);
        Reducer::new(self.config.notation).reduce(tokens.into_reducible())
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
