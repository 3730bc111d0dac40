//! Live git adapter using the `git` CLI.

use std::process::Command;

use tracing::debug;

use crate::ports::git::GitRepo;

/// Live git adapter that shells out to the `git` executable in the
/// current working directory.
pub struct LiveGitRepo;

impl GitRepo for LiveGitRepo {
    fn run(&self, args: &[&str]) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let command_line = args.join(" ");
        debug!("+ git {command_line}");
        let output = Command::new("git").args(args).output()?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output.status.code().map_or_else(|| "signal".to_string(), |c| c.to_string());
            return Err(format!(
                "git {command_line} exited with {code}: {}{}",
                stdout.trim_end(),
                stderr.trim_end()
            )
            .into());
        }
        Ok(stdout)
    }
}
