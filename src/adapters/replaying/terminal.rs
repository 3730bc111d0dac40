//! Replaying adapter for the `Terminal` port.

use std::path::Path;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::terminal::Terminal;

/// Replays recorded editor sessions and prompt answers from a cassette.
pub struct ReplayingTerminal {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingTerminal {
    /// Creates a new replaying terminal from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Terminal for ReplayingTerminal {
    fn launch_editor(
        &self,
        _command: &str,
        _path: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "terminal", "launch_editor");
        if let Some(err) = output.get("err") {
            let msg = err.as_str().unwrap_or("unknown error").to_string();
            return Err(msg.into());
        }
        Ok(())
    }

    fn confirm(&self, _prompt: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "terminal", "confirm");
        replay_result(&output, "terminal::confirm")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::make_replayer;
    use crate::cassette::format::Interaction;
    use serde_json::json;

    #[test]
    fn replays_editor_and_answer() {
        let replayer = make_replayer(vec![
            Interaction {
                seq: 0,
                port: "terminal".into(),
                method: "launch_editor".into(),
                input: json!({"command": "vi"}),
                output: json!({"ok": null}),
            },
            Interaction {
                seq: 1,
                port: "terminal".into(),
                method: "confirm".into(),
                input: json!({"prompt": "Add to git [y|n]: "}),
                output: json!({"ok": true}),
            },
        ]);
        let term = ReplayingTerminal::new(replayer);
        assert!(term.launch_editor("vi", Path::new("a.yaml")).is_ok());
        assert!(term.confirm("Add to git [y|n]: ").unwrap());
    }
}
