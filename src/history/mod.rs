//! Release history: tag timeline, version range, transient checkout and
//! fragment location.
//!
//! Everything here reads git through the [`GitRepo`] port. The stages run
//! in order: [`tags::resolve`] builds the timeline, [`range::resolve`]
//! picks the boundaries, and [`locate::locate`] walks the range for added
//! fragment files.

pub mod checkout;
pub mod decoration;
pub mod locate;
pub mod range;
pub mod tags;

use regex::Regex;

use crate::error::{RelnotesError, Result};
use crate::ports::GitRepo;
use decoration::Decoration;

/// Ref naming the current working position.
pub const CURRENT: &str = "HEAD";

/// Compiled release tag pattern.
///
/// The pattern is anchored at the start of the tag, so `v1` matches
/// `v1.2` but not `release-v1.2` unless the pattern allows a prefix.
#[derive(Debug, Clone)]
pub struct ReleasePattern {
    regex: Regex,
}

impl ReleasePattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`RelnotesError::Pattern`] if the pattern is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{pattern})"))
            .map_err(|source| RelnotesError::Pattern { pattern: pattern.to_string(), source })?;
        Ok(Self { regex })
    }

    /// Returns `true` if `tag` is a release tag.
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }

    /// The first tag of a decoration that is a release tag.
    #[must_use]
    pub fn release_tag<'a>(&self, decoration: &Decoration<'a>) -> Option<&'a str> {
        decoration.tags.iter().copied().find(|tag| self.matches(tag))
    }
}

/// Runs git through the port, wrapping failures as [`RelnotesError::Git`].
pub(crate) fn run_git(git: &dyn GitRepo, args: &[&str]) -> Result<String> {
    git.run(args).map_err(|e| RelnotesError::git(args, &e))
}
