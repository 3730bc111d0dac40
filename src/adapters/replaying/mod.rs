//! Replaying adapters: serve port calls from a recorded cassette.
//!
//! Running past the end of a recorded stream means the code under test made
//! a call the session never made; that is a test failure, so the helpers
//! here panic with the pending streams instead of returning port errors.

pub mod clock;
pub mod filesystem;
pub mod git;
pub mod id_gen;
pub mod terminal;

use std::sync::Mutex;

use crate::cassette::format::Interaction;
use crate::cassette::replayer::CassetteReplayer;

pub use clock::ReplayingClock;
pub use filesystem::ReplayingFileSystem;
pub use git::ReplayingGitRepo;
pub use id_gen::ReplayingIdGenerator;
pub use terminal::ReplayingTerminal;

/// Pulls the next recorded interaction for `port::method`.
pub(crate) fn next_interaction(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> Interaction {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    match replayer.next_interaction(port, method) {
        Some(interaction) => interaction,
        None => panic!(
            "Cassette exhausted: no recorded {port}::{method} call left; pending: [{}]",
            replayer.pending().join(", ")
        ),
    }
}

/// Pulls the next recorded output for `port::method`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    next_interaction(replayer, port, method).output
}

/// Extracts a Result from a cassette output JSON value.
///
/// Expects `{"ok": <value>}` or `{"err": "message"}`; a bare value is
/// treated as `ok`.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
