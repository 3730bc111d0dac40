//! Report, dump and lint runs: the history-to-report pipeline.

use tracing::debug;

use super::Settings;
use crate::context::ServiceContext;
use crate::error::{RelnotesError, Result};
use crate::history::checkout::CheckoutGuard;
use crate::history::{locate, range, run_git, tags, CURRENT};
use crate::notes::aggregate::{Aggregation, Collector};
use crate::report::{render_dump, render_text, RenderOptions};

/// What a report run prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Text report.
    Text,
    /// YAML dump of the aggregation.
    Yaml,
    /// Nothing; every fragment is validated.
    Lint,
}

/// Runs the pipeline and renders `output`.
///
/// Returns `None` for lint runs, which only validate.
///
/// # Errors
///
/// Returns the first fatal error; nothing is rendered in that case.
pub fn run(ctx: &ServiceContext, settings: &Settings, output: Output) -> Result<Option<String>> {
    let aggregation = collect(ctx, settings, output == Output::Lint)?;
    let rendered = match output {
        Output::Lint => None,
        Output::Yaml => Some(render_dump(&aggregation)?),
        Output::Text => {
            let options = RenderOptions {
                prelude: &settings.config.prelude_section_name,
                sections: &settings.config.sections,
                blame: settings.blame,
            };
            Some(render_text(&aggregation, &options))
        }
    };
    Ok(rendered)
}

/// Resolves the release range, locates its fragments and loads them
/// together with staged (and, for `lint`, all on-disk) fragments.
///
/// # Errors
///
/// Returns an error if the notes directory is missing, a git query fails,
/// or a fragment is unreadable or invalid.
pub fn collect(ctx: &ServiceContext, settings: &Settings, lint: bool) -> Result<Aggregation> {
    let notes_dir = &settings.notes_dir;
    if !ctx.fs.exists(notes_dir.path()) {
        return Err(RelnotesError::MissingNotesDir(notes_dir.to_string()));
    }
    let git = ctx.git.as_ref();

    let guard = if settings.end == CURRENT {
        None
    } else {
        Some(CheckoutGuard::switch(git, &settings.end)?)
    };
    let timeline = tags::resolve(
        git,
        &settings.end,
        &settings.pattern,
        settings.config.earliest_version.as_deref(),
    )?;
    let range = range::resolve(&timeline, settings.start.as_deref());
    let located = locate::locate(git, &range, notes_dir, &settings.pattern)?;
    if let Some(guard) = guard {
        guard.restore()?;
    }
    debug!("logs: {located:?}");

    let valid_sections = settings.config.valid_sections();
    let mut collector = Collector::new(ctx.fs.as_ref(), &valid_sections);
    for fragment in &located {
        collector.add_committed(fragment)?;
    }

    let author = run_git(git, &["config", "user.name"])?.trim().to_string();
    for path in run_git(git, &["diff", "--name-only", "--cached"])?.lines() {
        collector.add_uncommitted(notes_dir, path.trim(), &author)?;
    }
    if lint {
        let names = ctx.fs.list_dir(notes_dir.path()).map_err(|e| RelnotesError::Read {
            path: notes_dir.to_string(),
            message: e.to_string(),
        })?;
        for name in names {
            collector.add_uncommitted(notes_dir, &notes_dir.join(&name), &author)?;
        }
    }
    Ok(collector.finish())
}
