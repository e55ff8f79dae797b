pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod ffi;
pub mod reducer;
pub mod tokenizer;

pub use calculator::{Calculator, Evaluation, Outcome};
pub use config::{CliArgs, Config, Notation};
pub use error::CalcError;
