//! Replaying adapter for the `GitRepo` port.

use std::sync::Mutex;

use super::{next_interaction, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::git::GitRepo;

/// Replays recorded git command outputs from a cassette.
///
/// When the cassette kept the arguments of a call, the replayed call must
/// use the same ones; a mismatch is returned as a git error naming both
/// command lines.
pub struct ReplayingGitRepo {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingGitRepo {
    /// Creates a new replaying git repo from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl GitRepo for ReplayingGitRepo {
    fn run(&self, args: &[&str]) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let interaction = next_interaction(&self.replayer, "git", "run");
        if let Some(recorded) = interaction.git_args() {
            if recorded != args {
                return Err(format!(
                    "cassette diverged at seq {}: recorded `git {}`, replayed `git {}`",
                    interaction.seq,
                    recorded.join(" "),
                    args.join(" ")
                )
                .into());
            }
        }
        replay_result(&interaction.output, "git::run")
    }
}
