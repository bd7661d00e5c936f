//! Opaque asynchronous string key-value store backed by flat files.

use std::path::PathBuf;

use tokio::task;

use crate::error::{Result, TaskmateError};

/// Single-level key-value store mapping each key to one file under a root
/// directory.
///
/// Values are opaque strings. A write replaces the previous value for the
/// key wholesale; the scratch-file-then-rename sequence keeps the
/// replacement atomic per key.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// Creates a store rooted at the given directory.
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Reads the value stored under `key`.
    ///
    /// Returns `None` if the key was never written.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.root.join(key);

        task::spawn_blocking(move || match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TaskmateError::FileSystem { path, source: e }),
        })
        .await
        .map_err(|e| TaskmateError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Replaces the value stored under `key`.
    pub async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.root.join(key);
        let scratch = self.root.join(format!("{key}.tmp"));

        task::spawn_blocking(move || {
            std::fs::write(&scratch, value).map_err(|e| TaskmateError::FileSystem {
                path: scratch.clone(),
                source: e,
            })?;
            std::fs::rename(&scratch, &path)
                .map_err(|e| TaskmateError::FileSystem { path, source: e })
        })
        .await
        .map_err(|e| TaskmateError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn create_test_kv() -> (TempDir, FileKvStore) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let kv = FileKvStore::new(temp_dir.path().to_path_buf());
        (temp_dir, kv)
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let (_dir, kv) = create_test_kv();
        assert_eq!(kv.get("NEVER_WRITTEN").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let (_dir, kv) = create_test_kv();

        kv.set("GREETING", "hello".to_string()).await.unwrap();
        assert_eq!(kv.get("GREETING").await.unwrap().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_set_replaces_prior_value() {
        let (_dir, kv) = create_test_kv();

        kv.set("GREETING", "hello".to_string()).await.unwrap();
        kv.set("GREETING", "goodbye".to_string()).await.unwrap();

        assert_eq!(
            kv.get("GREETING").await.unwrap().as_deref(),
            Some("goodbye")
        );
    }
}
