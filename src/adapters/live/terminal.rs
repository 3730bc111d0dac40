//! Live terminal adapter: spawns the editor and reads answers from stdin.

use std::io::{BufRead, Write};
use std::path::Path;
use std::process::Command;

use crate::ports::terminal::Terminal;

/// Live terminal bound to the process's standard streams.
pub struct LiveTerminal;

impl Terminal for LiveTerminal {
    fn launch_editor(
        &self,
        command: &str,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or("empty editor command")?;
        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|e| format!("failed to launch editor {program}: {e}"))?;
        if !status.success() {
            return Err(format!("editor {command} exited with {status}").into());
        }
        Ok(())
    }

    fn confirm(&self, prompt: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

/// An answer is affirmative when its first character is `y` or `Y`.
fn is_yes(answer: &str) -> bool {
    answer.trim_start().chars().next().is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}
