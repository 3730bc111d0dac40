//! Filesystem port: fragments, the config file and new drafts.

use std::path::Path;

/// Access to the working tree.
///
/// Paths are repository-relative as git prints them, or relative to the
/// working directory for the config file.
pub trait FileSystem: Send + Sync {
    /// Reads a fragment or config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Writes a new fragment, replacing any file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if the path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Lists the entry names of a directory, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Modification time in epoch seconds; dates uncommitted fragments.
    ///
    /// # Errors
    ///
    /// Returns an error if the file metadata cannot be read.
    fn modified(&self, path: &Path) -> Result<i64, Box<dyn std::error::Error + Send + Sync>>;
}
