//! `relnotes.yaml` configuration.
//!
//! The file is optional; every key has a built-in default. Recognized keys:
//!
//! ```yaml
//! release_tag_re: '^v?((?:[\d.ab]|rc)+)'
//! prelude_section_name: release_summary
//! earliest_version: v1.0.0
//! sections:
//!   features: New Features
//!   fixes: Bug Fixes
//! template: |
//!   release_summary: ...
//! editor: vim
//! editor.win32: notepad
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{RelnotesError, Result};
use crate::ports::FileSystem;

/// Default location of the configuration file, relative to the working directory.
pub const CONFIG_PATH: &str = "relnotes.yaml";

/// Default release tag pattern.
pub const DEFAULT_RELEASE_TAG_RE: &str = r"^v?((?:[\d.ab]|rc)+)";

/// Default name of the free-text summary section.
pub const DEFAULT_PRELUDE_SECTION: &str = "release_summary";

const EDITOR_PREFIX: &str = "editor.";

/// A configured report section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Key used in fragment files.
    pub key: String,
    /// Title printed in the report.
    pub title: String,
}

/// Loaded configuration with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pattern a tag must match to count as a release.
    pub release_tag_re: String,
    /// Key of the summary section.
    pub prelude_section_name: String,
    /// Oldest tag to consider; history traversal stops there.
    pub earliest_version: Option<String>,
    /// Report sections in declaration order.
    pub sections: Vec<Section>,
    /// Initial content of fragments created with `--create`.
    pub template: Option<String>,
    /// Editor command used by `--create`.
    pub editor: Option<String>,
    /// Per-platform editor overrides (`editor.<platform>`), keyed by platform.
    pub platform_editors: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            release_tag_re: DEFAULT_RELEASE_TAG_RE.to_string(),
            prelude_section_name: DEFAULT_PRELUDE_SECTION.to_string(),
            earliest_version: None,
            sections: Vec::new(),
            template: None,
            editor: None,
            platform_editors: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    release_tag_re: Option<String>,
    prelude_section_name: Option<String>,
    earliest_version: Option<String>,
    sections: Option<serde_yaml::Mapping>,
    template: Option<String>,
    editor: Option<String>,
    #[serde(flatten)]
    other: BTreeMap<String, serde_yaml::Value>,
}

impl Config {
    /// Loads the configuration at `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        if !fs.is_file(path) {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs.read_to_string(path).map_err(|e| RelnotesError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&text, &path.display().to_string())
    }

    /// Parses configuration text. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed YAML or wrongly typed known keys.
    pub fn from_yaml(text: &str, origin: &str) -> Result<Self> {
        let config_err =
            |message: String| RelnotesError::Config { path: origin.to_string(), message };

        let value: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| config_err(e.to_string()))?;
        if value.is_null() {
            return Ok(Self::default());
        }
        let raw: RawConfig = serde_yaml::from_value(value).map_err(|e| config_err(e.to_string()))?;

        let mut sections = Vec::new();
        for (key, title) in raw.sections.unwrap_or_default() {
            let (Some(key), Some(title)) = (key.as_str(), title.as_str()) else {
                return Err(config_err(format!(
                    "sections must map names to titles, got {}",
                    yaml_inline(&key)
                )));
            };
            sections.push(Section { key: key.to_string(), title: title.to_string() });
        }

        let mut platform_editors = BTreeMap::new();
        for (key, value) in raw.other {
            match (key.strip_prefix(EDITOR_PREFIX), value.as_str()) {
                (Some(platform), Some(editor)) => {
                    platform_editors.insert(platform.to_string(), editor.to_string());
                }
                _ => warn!("ignoring unknown config key {key:?} in {origin}"),
            }
        }

        let defaults = Self::default();
        Ok(Self {
            release_tag_re: raw.release_tag_re.unwrap_or(defaults.release_tag_re),
            prelude_section_name: raw
                .prelude_section_name
                .unwrap_or(defaults.prelude_section_name),
            earliest_version: raw.earliest_version,
            sections,
            template: raw.template,
            editor: raw.editor,
            platform_editors,
        })
    }

    /// Keys a fragment may use: the summary plus every configured section.
    #[must_use]
    pub fn valid_sections(&self) -> BTreeSet<String> {
        std::iter::once(self.prelude_section_name.clone())
            .chain(self.sections.iter().map(|s| s.key.clone()))
            .collect()
    }

    /// The editor configured for `platform`, else the generic `editor` key.
    #[must_use]
    pub fn editor_for(&self, platform: &str) -> Option<&str> {
        self.platform_editors.get(platform).or(self.editor.as_ref()).map(String::as_str)
    }
}

/// Platform name used in `editor.<platform>` keys.
///
/// Uses the conventional `linux` / `darwin` / `win32` spellings so existing
/// configuration files keep working.
#[must_use]
pub fn platform_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}

fn yaml_inline(value: &serde_yaml::Value) -> String {
    serde_yaml::to_string(value).map_or_else(|_| format!("{value:?}"), |s| s.trim().to_string())
}
