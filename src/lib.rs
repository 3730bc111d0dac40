//! Core library entry for the `relnotes` CLI.
//!
//! `relnotes` collects per-change YAML fragments from a notes directory,
//! assigns each to the release whose tag introduced it, and renders a
//! sectioned changelog.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod history;
pub mod notes;
pub mod ports;
pub mod report;

#[cfg(test)]
mod testing;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or the run fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}
