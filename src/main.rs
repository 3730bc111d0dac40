//! Binary entrypoint for the `relnotes` CLI.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use relnotes::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);
    match relnotes::commands::dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `--debug` overrides `RUST_LOG`.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("relnotes=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}
