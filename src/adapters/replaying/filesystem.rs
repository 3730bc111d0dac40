//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "fs", "read_to_string");
        replay_result(&output, "fs::read_to_string")
    }

    fn write(
        &self,
        _path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "fs", "write");
        if let Some(err) = output.get("err") {
            let msg = err.as_str().unwrap_or("unknown error").to_string();
            return Err(msg.into());
        }
        Ok(())
    }

    fn exists(&self, _path: &Path) -> bool {
        let output = next_output(&self.replayer, "fs", "exists");
        output.as_bool().expect("fs::exists: expected boolean output")
    }

    fn is_file(&self, _path: &Path) -> bool {
        let output = next_output(&self.replayer, "fs", "is_file");
        output.as_bool().expect("fs::is_file: expected boolean output")
    }

    fn list_dir(
        &self,
        _path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "fs", "list_dir");
        replay_result(&output, "fs::list_dir")
    }

    fn modified(&self, _path: &Path) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "fs", "modified");
        replay_result(&output, "fs::modified")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::make_replayer;
    use crate::cassette::format::Interaction;
    use serde_json::json;

    #[test]
    fn replaying_fs_read_to_string() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "read_to_string".into(),
            input: json!({"path": "releasenotes/a.yaml"}),
            output: json!({"ok": "release_summary: hi\n"}),
        }]);
        let fs = ReplayingFileSystem::new(replayer);
        let result = fs.read_to_string(Path::new("releasenotes/a.yaml")).unwrap();
        assert_eq!(result, "release_summary: hi\n");
    }

    #[test]
    fn replaying_fs_read_to_string_error() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "fs".into(),
            method: "read_to_string".into(),
            input: json!({"path": "/missing"}),
            output: json!({"err": "file not found"}),
        }]);
        let fs = ReplayingFileSystem::new(replayer);
        let result = fs.read_to_string(Path::new("/missing"));
        assert!(result.unwrap_err().to_string().contains("file not found"));
    }

    #[test]
    fn replaying_fs_metadata_queries() {
        let replayer = make_replayer(vec![
            Interaction {
                seq: 0,
                port: "fs".into(),
                method: "is_file".into(),
                input: json!({"path": "releasenotes/a.yaml"}),
                output: json!(true),
            },
            Interaction {
                seq: 1,
                port: "fs".into(),
                method: "modified".into(),
                input: json!({"path": "releasenotes/a.yaml"}),
                output: json!({"ok": 1_700_000_000}),
            },
        ]);
        let fs = ReplayingFileSystem::new(replayer);
        assert!(fs.is_file(Path::new("releasenotes/a.yaml")));
        assert_eq!(fs.modified(Path::new("releasenotes/a.yaml")).unwrap(), 1_700_000_000);
    }
}
