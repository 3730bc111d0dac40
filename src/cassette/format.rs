//! Cassette files: recorded port traffic of one `relnotes` session.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One call on a port and what it returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the session (assigned by the recorder).
    pub seq: u64,
    /// Port name: `git`, `fs`, `clock`, `id_gen` or `terminal`.
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Call arguments; git calls carry `{"args": [...]}`.
    pub input: serde_json::Value,
    /// Returned value, or `{"ok": ...}` / `{"err": "..."}` for fallible calls.
    pub output: serde_json::Value,
}

impl Interaction {
    /// The recorded git arguments, if this is a git call that kept them.
    #[must_use]
    pub fn git_args(&self) -> Option<Vec<&str>> {
        self.input.get("args")?.as_array()?.iter().map(serde_json::Value::as_str).collect()
    }
}

/// A recorded session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Session name.
    pub name: String,
    /// When the session was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Commit checked out in the recorded repository.
    pub head: String,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a cassette.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}
