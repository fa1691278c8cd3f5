//! Filesystem-backed task status and artifact store.
//!
//! The external task framework leaves a task directory behind: a
//! `status.json` record plus one JSON file per named artifact
//! (`BrokenLinks.json`, `Error.json`). This store reads that directory; it
//! never writes. Every read happens at poll time, so concurrent polls each
//! see an independent snapshot.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::STATUS_FILE;
use crate::status::types::TaskStatus;
use crate::status::{ArtifactStore, TaskStatusStore};

/// Reads task status and artifacts from a task directory.
pub struct FsTaskStore {
    dir: PathBuf,
}

impl FsTaskStore {
    /// Creates a store over a task directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsTaskStore { dir: dir.into() }
    }

    /// The directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TaskStatusStore for FsTaskStore {
    fn latest_status(&self) -> Result<Option<TaskStatus>> {
        let path = self.dir.join(STATUS_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read task status {}", path.display()))
            }
        };
        let status: TaskStatus = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse task status {}", path.display()))?;
        Ok(Some(status))
    }
}

impl ArtifactStore for FsTaskStore {
    fn read_artifact(&self, name: &str) -> Result<Option<String>> {
        let path = self.dir.join(format!("{name}.json"));
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read artifact {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::types::TaskState;
    use tempfile::TempDir;

    #[test]
    fn test_missing_status_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FsTaskStore::new(dir.path());
        assert_eq!(store.latest_status().unwrap(), None);
    }

    #[test]
    fn test_reads_status_record() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(STATUS_FILE),
            r#"{"state": "succeeded", "completed_steps": 2,
                "created": "2026-08-23T12:00:00Z"}"#,
        )
        .unwrap();

        let store = FsTaskStore::new(dir.path());
        let status = store.latest_status().unwrap().unwrap();
        assert_eq!(status.state, TaskState::Succeeded);
        assert_eq!(status.completed_steps, 2);
    }

    #[test]
    fn test_corrupt_status_record_is_an_error() {
        // A present-but-unreadable record should surface, not read as "no task"
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(STATUS_FILE), "{not json").unwrap();

        let store = FsTaskStore::new(dir.path());
        assert!(store.latest_status().is_err());
    }

    #[test]
    fn test_missing_artifact_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FsTaskStore::new(dir.path());
        assert_eq!(store.read_artifact("BrokenLinks").unwrap(), None);
    }

    #[test]
    fn test_reads_named_artifact() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("BrokenLinks.json"), "[]").unwrap();

        let store = FsTaskStore::new(dir.path());
        assert_eq!(
            store.read_artifact("BrokenLinks").unwrap().as_deref(),
            Some("[]")
        );
    }
}
