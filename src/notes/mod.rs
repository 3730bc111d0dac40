//! Note fragments: location on disk, schema validation and aggregation.

pub mod aggregate;
pub mod fragment;

use std::path::Path;

use serde::Serialize;

/// Tag label for fragments that are not committed yet.
pub const UNCOMMITTED: &str = "Uncommitted";

/// One line of release notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    /// Time of the commit that added the fragment (or file mtime), epoch seconds.
    pub time: i64,
    /// Committer (or configured user) name.
    pub name: String,
    /// Abbreviated commit hash; `None` for uncommitted fragments.
    pub hash: Option<String>,
    /// The note text.
    pub note: String,
}

/// Provenance shared by every entry of one fragment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentMeta {
    /// Epoch seconds.
    pub time: i64,
    /// Author name.
    pub name: String,
    /// Abbreviated commit hash, if committed.
    pub hash: Option<String>,
}

/// The notes directory, normalized to a forward-slash relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesDir {
    dir: String,
}

impl NotesDir {
    /// Creates the directory from a user-supplied path (see [`normalize`]).
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let dir = normalize(raw);
        let dir = if dir == "." { String::new() } else { dir };
        Self { dir }
    }

    /// The directory as a path; the current directory when empty.
    #[must_use]
    pub fn path(&self) -> &Path {
        if self.dir.is_empty() {
            Path::new(".")
        } else {
            Path::new(&self.dir)
        }
    }

    /// Joins a directory entry name onto the notes directory.
    #[must_use]
    pub fn join(&self, name: &str) -> String {
        if self.dir.is_empty() {
            name.to_string()
        } else {
            format!("{}/{name}", self.dir)
        }
    }

    /// Returns `true` if `path` lies inside the directory.
    ///
    /// Containment is decided per path component, so `releasenotes-old/x`
    /// is not inside `releasenotes`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        let path = normalize(path);
        self.dir.is_empty()
            || path.strip_prefix(&self.dir).is_some_and(|rest| rest.starts_with('/'))
    }

    /// Returns `true` for YAML files inside the directory.
    #[must_use]
    pub fn is_fragment(&self, path: &str) -> bool {
        self.contains(path)
            && Path::new(path)
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
    }
}

/// Normalizes a repository-relative path: backslashes become slashes,
/// leading `./` and trailing slashes are removed.
#[must_use]
pub fn normalize(path: &str) -> String {
    let mut path = path.replace('\\', "/");
    while let Some(rest) = path.strip_prefix("./") {
        path = rest.to_string();
    }
    path.trim_end_matches('/').to_string()
}

impl std::fmt::Display for NotesDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path().display().to_string())
    }
}
