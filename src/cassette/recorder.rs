//! Writes sessions to cassette files.

use std::path::PathBuf;

use chrono::Utc;
use serde_json::json;

use super::format::{Cassette, Interaction};

/// Collects interactions and writes them as a YAML cassette.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    head: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Creates a recorder for the cassette at `path`; `head` is the commit
    /// the recorded repository was at.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, head: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), head: head.into(), interactions: Vec::new() }
    }

    /// Appends an interaction; its `seq` is its position in the session.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        self.interactions.push(Interaction {
            seq: self.interactions.len() as u64,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
    }

    /// Appends a `git` call with its stdout, or its error message.
    pub fn record_git(&mut self, args: &[&str], result: Result<&str, &str>) {
        let output = match result {
            Ok(stdout) => json!({ "ok": stdout }),
            Err(message) => json!({ "err": message }),
        };
        self.record("git", "run", json!({ "args": args }), output);
    }

    /// Writes the cassette, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            head: self.head,
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}
