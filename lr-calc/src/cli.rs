use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::debug;

use crate::calculator::{Calculator, Outcome};
use crate::config::{CliArgs, PROMPT};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SENTINEL: i32 = 1;
pub const EXIT_FAILURE: i32 = 2;

/// Line printed for every token that is neither a number nor an operator.
pub const INVALID_TOKEN_MESSAGE: &str = "error in input";

/// Reads one line (unless the expression came on the command line),
/// evaluates it and reports to `out`/`err`. Returns the process exit code.
pub fn run(
    args: &CliArgs,
    mut input: impl BufRead,
    mut out: impl Write,
    mut err: impl Write,
) -> anyhow::Result<i32> {
    let calculator = Calculator::new(args.config());

    let line = match &args.expression {
        Some(expression) => expression.clone(),
        None => {
            if !args.quiet {
                writeln!(out, "{}", PROMPT).context("Failed to print the prompt")?;
                out.flush()?;
            }
            let mut line = String::new();
            input
                .read_line(&mut line)
                .context("Failed to read the input line")?;
            line
        }
    };
    debug!(line = line.trim_end(), "read line");

    let evaluation = match calculator.evaluate_line(&line) {
        Outcome::Sentinel => return Ok(EXIT_SENTINEL),
        Outcome::Evaluated(evaluation) => evaluation,
    };

    for _ in &evaluation.diagnostics {
        writeln!(out, "{}", INVALID_TOKEN_MESSAGE)?;
    }

    match evaluation.result {
        Ok(result) => {
            writeln!(out, "{}", result)?;
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            writeln!(err, "{}", e)?;
            Ok(EXIT_FAILURE)
        }
    }
}
