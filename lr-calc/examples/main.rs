use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lr_calc::cli;
use lr_calc::CliArgs;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = CliArgs::parse();

    let exit_code = match cli::run(&args, io::stdin().lock(), io::stdout(), io::stderr()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            cli::EXIT_FAILURE
        }
    };

    std::process::exit(exit_code);
}
