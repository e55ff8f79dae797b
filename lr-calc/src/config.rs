use clap::{Parser, ValueEnum};

pub const DEFAULT_SENTINEL: &str = "Ende";
pub const PROMPT: &str = "Enter your values";

/// Where an operator finds its two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Notation {
    /// `2 + 3`: the tokens on either side of the operator.
    #[default]
    Infix,
    /// `2 3 +`: the two tokens right before the operator.
    Postfix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub notation: Notation,
    /// A line equal to this ends the program before it is tokenized.
    pub sentinel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notation: Notation::default(),
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

/// Evaluates a line of integers and `+ - * /` strictly left to right.
#[derive(Debug, Parser)]
#[command(name = "lr-calc", version)]
pub struct CliArgs {
    /// Expression to evaluate, read from stdin when omitted. Put it after
    /// `--` when it starts with a negative number.
    pub expression: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Notation::Infix)]
    pub notation: Notation,

    #[arg(short, long, default_value = DEFAULT_SENTINEL)]
    pub sentinel: String,

    /// Don't print the prompt before reading stdin.
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    pub fn config(&self) -> Config {
        Config {
            notation: self.notation,
            sentinel: self.sentinel.clone(),
        }
    }
}
