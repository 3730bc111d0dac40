//! `--create`: author a new fragment in the editor.

use std::path::Path;

use chrono::Local;
use tracing::{debug, info};

use super::Settings;
use crate::config::{platform_name, Config};
use crate::context::ServiceContext;
use crate::error::{RelnotesError, Result};
use crate::history::run_git;

const ADD_PROMPT: &str = "Add to git [y|n]: ";

/// Creates a fragment from the template, opens it in the editor and
/// optionally stages it. Returns the path of the new file.
///
/// # Errors
///
/// Returns an error if the notes directory is missing, the file cannot be
/// written, the editor fails, or `git add` fails.
pub fn run(ctx: &ServiceContext, settings: &Settings) -> Result<String> {
    let notes_dir = &settings.notes_dir;
    if !ctx.fs.exists(notes_dir.path()) {
        return Err(RelnotesError::MissingNotesDir(notes_dir.to_string()));
    }

    let date = ctx.clock.now().with_timezone(&Local).format("%Y-%m-%d");
    let path = notes_dir.join(&format!("{date}-{}.yaml", ctx.id_gen.generate_id()));
    let contents = settings
        .config
        .template
        .clone()
        .unwrap_or_else(|| default_template(&settings.config));
    ctx.fs
        .write(Path::new(&path), &contents)
        .map_err(|e| RelnotesError::Write { path: path.clone(), message: e.to_string() })?;
    info!("created {path}");

    let editor = resolve_editor(&settings.config, platform_name(), |var| std::env::var(var).ok());
    debug!("editor: {editor}");
    ctx.terminal
        .launch_editor(&editor, Path::new(&path))
        .map_err(|e| RelnotesError::Editor(e.to_string()))?;

    let add = ctx.terminal.confirm(ADD_PROMPT);
    if add.map_err(|e| RelnotesError::Prompt(e.to_string()))? {
        run_git(ctx.git.as_ref(), &["add", path.as_str()])?;
        info!("staged {path}");
    }
    Ok(path)
}

/// Editor command for `platform`: configuration first, then `$VISUAL`,
/// `$EDITOR`, and finally the platform default.
pub fn resolve_editor(
    config: &Config,
    platform: &str,
    env: impl Fn(&str) -> Option<String>,
) -> String {
    config
        .editor_for(platform)
        .map(String::from)
        .or_else(|| env("VISUAL"))
        .or_else(|| env("EDITOR"))
        .filter(|editor| !editor.trim().is_empty())
        .unwrap_or_else(|| if platform == "win32" { "notepad" } else { "vi" }.to_string())
}

/// Commented skeleton listing every key a fragment may use.
fn default_template(config: &Config) -> String {
    let mut template =
        format!("# {}: >\n#   Summary of the change.\n", config.prelude_section_name);
    for section in &config.sections {
        template.push_str(&format!("# {}:\n#   - {}\n", section.key, section.title));
    }
    template
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Interaction;
    use crate::cli::Cli;
    use crate::testing::{context, MemFs, ScriptedGit};
    use chrono::{DateTime, Utc};
    use clap::Parser;
    use serde_json::{json, Value};

    const NOW: &str = "2024-06-15T10:30:00Z";
    const ID: &str = "0123456789abcdef";

    fn interaction(seq: u64, port: &str, method: &str, output: Value) -> Interaction {
        Interaction { seq, port: port.into(), method: method.into(), input: json!({}), output }
    }

    fn session(editor: Value, answer: bool) -> Vec<Interaction> {
        vec![
            interaction(0, "clock", "now", json!(NOW)),
            interaction(1, "id_gen", "generate_id", json!(ID)),
            interaction(2, "terminal", "launch_editor", editor),
            interaction(3, "terminal", "confirm", json!({"ok": answer})),
        ]
    }

    fn settings(config_yaml: &str) -> Settings {
        let config = Config::from_yaml(config_yaml, "relnotes.yaml").unwrap();
        Settings::new(&Cli::parse_from(["relnotes", "--create"]), config).unwrap()
    }

    fn expected_path() -> String {
        let now: DateTime<Utc> = NOW.parse().unwrap();
        format!("releasenotes/{}-{ID}.yaml", now.with_timezone(&Local).format("%Y-%m-%d"))
    }

    #[test]
    fn writes_template_and_stages_on_yes() {
        let path = expected_path();
        let git = ScriptedGit::new().on(&format!("add {path}"), "");
        let fs = MemFs::new().with_dir("releasenotes");
        let ctx = context(git.clone(), fs.clone(), session(json!({"ok": null}), true));
        let config = "template: |\n  release_summary: >\n    Describe it.\n";

        let created = run(&ctx, &settings(config)).unwrap();

        assert_eq!(created, path);
        assert_eq!(fs.file(&path).as_deref(), Some("release_summary: >\n  Describe it.\n"));
        assert_eq!(git.calls(), [format!("add {path}")]);
    }

    #[test]
    fn no_answer_leaves_file_unstaged() {
        let git = ScriptedGit::new();
        let fs = MemFs::new().with_dir("releasenotes");
        let ctx = context(git.clone(), fs.clone(), session(json!({"ok": null}), false));
        run(&ctx, &settings("")).unwrap();
        assert!(git.calls().is_empty());
        assert_eq!(fs.file_names().len(), 1);
    }

    #[test]
    fn default_template_lists_sections() {
        let fs = MemFs::new().with_dir("releasenotes");
        let ctx = context(ScriptedGit::new(), fs.clone(), session(json!({"ok": null}), false));
        run(&ctx, &settings("sections:\n  fixes: Bug Fixes\n")).unwrap();
        let contents = fs.file(&expected_path()).unwrap();
        assert!(contents.starts_with("# release_summary: >\n"));
        assert!(contents.contains("# fixes:\n#   - Bug Fixes\n"));
        let parsed: Value = serde_yaml::from_str(&contents).unwrap();
        assert!(parsed.is_null());
    }

    #[test]
    fn editor_failure_is_fatal() {
        let git = ScriptedGit::new();
        let fs = MemFs::new().with_dir("releasenotes");
        let editor = json!({"err": "editor vi exited with exit status: 1"});
        let ctx = context(git.clone(), fs, session(editor, true));
        let err = run(&ctx, &settings("")).unwrap_err();
        assert!(err.to_string().contains("exited with"));
        assert!(git.calls().is_empty());
    }

    #[test]
    fn missing_notes_dir_creates_nothing() {
        let fs = MemFs::new();
        let ctx = context(ScriptedGit::new(), fs.clone(), vec![]);
        let err = run(&ctx, &settings("")).unwrap_err();
        assert_eq!(err.to_string(), "expected folder: releasenotes");
        assert!(fs.file_names().is_empty());
    }

    #[test]
    fn editor_resolution_order() {
        let env = |var: &str| match var {
            "VISUAL" => Some("code --wait".to_string()),
            "EDITOR" => Some("nano".to_string()),
            _ => None,
        };
        let no_env = |_: &str| None;
        let configured =
            Config::from_yaml("editor: vim\neditor.win32: notepad++\n", "relnotes.yaml").unwrap();

        assert_eq!(resolve_editor(&configured, "win32", env), "notepad++");
        assert_eq!(resolve_editor(&configured, "linux", env), "vim");
        assert_eq!(resolve_editor(&Config::default(), "linux", env), "code --wait");
        assert_eq!(
            resolve_editor(&Config::default(), "linux", |v: &str| (v == "EDITOR")
                .then(|| "nano".to_string())),
            "nano"
        );
        assert_eq!(resolve_editor(&Config::default(), "linux", no_env), "vi");
        assert_eq!(resolve_editor(&Config::default(), "win32", no_env), "notepad");
    }
}
