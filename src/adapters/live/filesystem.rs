//! Live filesystem adapter using `std::fs`.

use std::path::Path;
use std::time::UNIX_EPOCH;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                entries.push(name.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }

    fn modified(&self, path: &Path) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
        let modified = std::fs::metadata(path)?.modified()?;
        let secs = modified.duration_since(UNIX_EPOCH)?.as_secs();
        Ok(i64::try_from(secs)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_sorted_entries_and_reports_files() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LiveFileSystem;
        fs.write(&dir.path().join("b.yaml"), "x").unwrap();
        fs.write(&dir.path().join("a.yaml"), "y").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        assert_eq!(fs.list_dir(dir.path()).unwrap(), vec!["a.yaml", "b.yaml", "sub"]);
        assert!(fs.is_file(&dir.path().join("a.yaml")));
        assert!(!fs.is_file(&dir.path().join("sub")));
        assert!(fs.exists(&dir.path().join("sub")));
        assert!(fs.modified(&dir.path().join("a.yaml")).unwrap() > 0);
    }

    #[test]
    fn reading_missing_file_fails() {
        let fs = LiveFileSystem;
        assert!(fs.read_to_string(Path::new("/definitely/not/here.yaml")).is_err());
    }
}
