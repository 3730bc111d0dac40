//! Command dispatch and handlers.

pub mod create;
pub mod report;

use tracing::debug;

use crate::cli::{Cli, Mode};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::history::{ReleasePattern, CURRENT};
use crate::notes::NotesDir;

/// Command-line options merged with the configuration file.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Loaded configuration.
    pub config: Config,
    /// Release tag pattern (`--version-regex` or `release_tag_re`).
    pub pattern: ReleasePattern,
    /// Fragment directory.
    pub notes_dir: NotesDir,
    /// Requested end version; `HEAD` by default.
    pub end: String,
    /// Explicit start version.
    pub start: Option<String>,
    /// Annotate report entries.
    pub blame: bool,
}

impl Settings {
    /// Merges CLI flags over `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the release tag pattern does not compile.
    pub fn new(cli: &Cli, config: Config) -> Result<Self> {
        let pattern =
            ReleasePattern::new(cli.version_regex.as_deref().unwrap_or(&config.release_tag_re))?;
        let notes_dir = NotesDir::new(&cli.notes_dir);
        debug!("notes_dir: {notes_dir}");
        Ok(Self {
            config,
            pattern,
            notes_dir,
            end: cli.version.clone().unwrap_or_else(|| CURRENT.to_string()),
            start: cli.previous.clone(),
            blame: cli.blame,
        })
    }
}

/// Dispatch a parsed command line against the live environment.
///
/// # Errors
///
/// Returns an error string if the selected mode fails.
pub fn dispatch(cli: &Cli) -> std::result::Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(cli, &ctx).map_err(|e| e.to_string())
}

/// Dispatch with the given service context, printing any output.
fn dispatch_with_context(cli: &Cli, ctx: &ServiceContext) -> Result<()> {
    let config = Config::load(ctx.fs.as_ref(), &cli.config)?;
    let settings = Settings::new(cli, config)?;
    let output = match cli.mode() {
        Mode::Create => return create::run(ctx, &settings).map(|_| ()),
        Mode::Report => report::Output::Text,
        Mode::Dump => report::Output::Yaml,
        Mode::Lint => report::Output::Lint,
    };
    if let Some(rendered) = report::run(ctx, &settings, output)? {
        print!("{rendered}");
    }
    Ok(())
}
