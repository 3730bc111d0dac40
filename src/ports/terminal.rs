//! Terminal port for the interactive parts of fragment authoring.

use std::path::Path;

/// Launches the user's editor and asks yes/no questions.
///
/// Abstracting the terminal keeps `--create` testable without a tty.
pub trait Terminal: Send + Sync {
    /// Opens `path` in the editor described by `command` and waits for it.
    ///
    /// `command` is a program name optionally followed by whitespace
    /// separated arguments; the path is appended as the last argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor cannot be spawned or exits non-zero.
    fn launch_editor(
        &self,
        command: &str,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Prints `prompt` and reads one line of input; `true` means yes.
    ///
    /// # Errors
    ///
    /// Returns an error if standard input cannot be read.
    fn confirm(&self, prompt: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
