//! Cassette format for recording and replaying port interactions.
//!
//! A cassette captures the outputs of a session (mostly `git` queries) so
//! that the history pipeline can be replayed deterministically in tests.

pub mod format;
pub mod recorder;
pub mod replayer;
