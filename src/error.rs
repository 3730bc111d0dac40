//! Error taxonomy for the release-notes pipeline.

use thiserror::Error;

/// Boxed error type returned by port implementations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Fatal failures of a `relnotes` run.
///
/// Every variant aborts the run; the CLI prints the message prefixed with
/// `ERROR:` and exits non-zero.
#[derive(Debug, Error)]
pub enum RelnotesError {
    /// The notes directory does not exist.
    #[error("expected folder: {0}")]
    MissingNotesDir(String),

    /// A git invocation failed or exited non-zero.
    #[error("git {command} failed: {message}")]
    Git {
        /// The git arguments, space separated.
        command: String,
        /// Adapter message, including the process output.
        message: String,
    },

    /// A fragment used a key that is neither the summary nor a configured section.
    #[error("{path}: {key} is not a valid section")]
    InvalidSection {
        /// Fragment file path.
        path: String,
        /// Offending key.
        key: String,
    },

    /// A section value was neither a string nor a list.
    #[error("{path}: '{key}' : list of entries or single string")]
    InvalidValue {
        /// Fragment file path.
        path: String,
        /// Section whose value has the wrong shape.
        key: String,
    },

    /// A list element was not a plain string.
    #[error("{path}: '{value}' : must be a simple string")]
    InvalidEntry {
        /// Fragment file path.
        path: String,
        /// The offending element, rendered as YAML.
        value: String,
    },

    /// The fragment document is not a mapping.
    #[error("{path}: expected a mapping of section names to notes")]
    NotAMapping {
        /// Fragment file path.
        path: String,
    },

    /// A fragment file is not valid YAML.
    #[error("{path}: {source}")]
    Parse {
        /// Fragment file path.
        path: String,
        /// Underlying parser error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A file could not be read.
    #[error("failed to read {path}: {message}")]
    Read {
        /// File path.
        path: String,
        /// Adapter message.
        message: String,
    },

    /// A file could not be written.
    #[error("failed to write {path}: {message}")]
    Write {
        /// File path.
        path: String,
        /// Adapter message.
        message: String,
    },

    /// The configuration file exists but is malformed.
    #[error("invalid config {path}: {message}")]
    Config {
        /// Configuration file path.
        path: String,
        /// Parser message.
        message: String,
    },

    /// The release tag pattern is not a valid regular expression.
    #[error("invalid release tag pattern {pattern:?}: {source}")]
    Pattern {
        /// The pattern as configured.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// The editor could not be launched or exited non-zero.
    #[error("{0}")]
    Editor(String),

    /// The terminal prompt could not be read.
    #[error("failed to read answer: {0}")]
    Prompt(String),

    /// The structured dump could not be serialized.
    #[error("failed to render dump: {0}")]
    Dump(#[from] serde_yaml::Error),
}

impl RelnotesError {
    /// Wraps a `GitRepo` port failure for the given arguments.
    #[must_use]
    pub fn git(args: &[&str], err: &PortError) -> Self {
        Self::Git { command: args.join(" "), message: err.to_string() }
    }
}

/// Result alias for the pipeline.
pub type Result<T> = std::result::Result<T, RelnotesError>;
