//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::config::CONFIG_PATH;

/// Top-level CLI parser for `relnotes`.
#[derive(Debug, Parser)]
#[command(name = "relnotes", about = "Assemble release notes from YAML fragments and git tags")]
pub struct Cli {
    /// Version to report on (default: current branch).
    #[arg(long, value_name = "REF")]
    pub version: Option<String>,

    /// Previous version (default: the release before `--version`).
    #[arg(long, value_name = "REF")]
    pub previous: Option<String>,

    /// Release tag pattern (default: `release_tag_re` from the config).
    #[arg(long, value_name = "REGEX")]
    pub version_regex: Option<String>,

    /// Release notes folder.
    #[arg(
        long,
        visible_alias = "rel-notes-dir",
        value_name = "DIR",
        default_value = "./releasenotes"
    )]
    pub notes_dir: String,

    /// Configuration file.
    #[arg(long, value_name = "FILE", default_value = CONFIG_PATH)]
    pub config: PathBuf,

    /// Debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Dump the collected notes as YAML.
    #[arg(long)]
    pub yaml: bool,

    /// Validate every fragment without printing a report.
    #[arg(long)]
    pub lint: bool,

    /// Create a new fragment and open it in the editor.
    #[arg(long)]
    pub create: bool,

    /// Show commit hash, author and date for each entry.
    #[arg(long)]
    pub blame: bool,
}

/// What a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Text report on stdout.
    Report,
    /// YAML dump on stdout.
    Dump,
    /// Validation only.
    Lint,
    /// Author a new fragment.
    Create,
}

impl Cli {
    /// The selected mode; `--create` wins over `--lint`, which wins over `--yaml`.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.create {
            Mode::Create
        } else if self.lint {
            Mode::Lint
        } else if self.yaml {
            Mode::Dump
        } else {
            Mode::Report
        }
    }
}
