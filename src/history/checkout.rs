//! Transient checkout of the requested end version.

use tracing::{debug, warn};

use super::{run_git, CURRENT};
use crate::error::Result;
use crate::ports::GitRepo;

/// Holds the working tree at another version and restores the original
/// position exactly once.
///
/// Call [`CheckoutGuard::restore`] on the success path to surface restore
/// errors; if the guard is dropped first (an earlier `?`), the restore is
/// attempted from `Drop` and a failure is only logged.
pub struct CheckoutGuard<'a> {
    git: &'a dyn GitRepo,
    original: Option<String>,
}

impl<'a> CheckoutGuard<'a> {
    /// Records the current position and checks out `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the position cannot be read or the checkout
    /// fails; in the latter case the original position is still restored.
    pub fn switch(git: &'a dyn GitRepo, target: &str) -> Result<Self> {
        let original = current_position(git)?;
        debug!("switching from {original} to {target}");
        let guard = Self { git, original: Some(original) };
        checkout(git, target)?;
        Ok(guard)
    }

    /// Checks the original position back out.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkout fails.
    pub fn restore(mut self) -> Result<()> {
        match self.original.take() {
            Some(original) => checkout(self.git, &original),
            None => Ok(()),
        }
    }
}

impl Drop for CheckoutGuard<'_> {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            if let Err(e) = checkout(self.git, &original) {
                warn!("failed to restore {original}: {e}");
            }
        }
    }
}

/// Branch name, or the commit id when detached.
fn current_position(git: &dyn GitRepo) -> Result<String> {
    let branch = run_git(git, &["rev-parse", "--abbrev-ref", CURRENT])?.trim().to_string();
    if branch != CURRENT {
        return Ok(branch);
    }
    Ok(run_git(git, &["rev-parse", CURRENT])?.trim().to_string())
}

fn checkout(git: &dyn GitRepo, target: &str) -> Result<()> {
    run_git(git, &["-c", "advice.detachedHead=false", "checkout", target]).map(|_| ())
}
