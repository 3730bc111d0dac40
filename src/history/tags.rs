//! Release timeline from tag history.

use tracing::debug;

use super::decoration::Decoration;
use super::{run_git, ReleasePattern};
use crate::error::Result;
use crate::ports::GitRepo;

/// Release tags reachable from the end reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    /// Release tags, oldest first, without duplicates.
    pub tags: Vec<String>,
    /// The end reference, replaced by its release tag when the checked-out
    /// end commit is itself a release (`--version rel` on a tagged tip).
    pub end: String,
}

/// Walks `git log <end>` newest first and collects release tags.
///
/// Each commit contributes at most one tag: the first of its decorations
/// that matches `pattern`. Traversal stops at the commit carrying
/// `earliest` (inclusive).
///
/// # Errors
///
/// Returns an error if the git query fails.
pub fn resolve(
    git: &dyn GitRepo,
    end: &str,
    pattern: &ReleasePattern,
    earliest: Option<&str>,
) -> Result<Timeline> {
    let log = run_git(git, &["log", end, "--pretty=%D"])?;

    let mut resolved_end = end.to_string();
    let mut tags: Vec<String> = Vec::new();
    for line in log.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let decoration = Decoration::parse(line);
        if let Some(tag) = pattern.release_tag(&decoration) {
            if decoration.head {
                resolved_end = tag.to_string();
            }
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        if earliest.is_some_and(|e| decoration.tags.contains(&e)) {
            break;
        }
    }
    tags.reverse();

    debug!("tags: {tags:?}, end: {resolved_end}");
    Ok(Timeline { tags, end: resolved_end })
}
