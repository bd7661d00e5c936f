//! Builder for creating and configuring TaskStore instances.

use std::path::{Path, PathBuf};

use crate::error::{Result, TaskmateError};

use super::{FileKvStore, TaskStore, STORAGE_KEY};

/// Builder for creating and configuring [`TaskStore`] instances.
#[derive(Debug, Clone)]
pub struct TaskStoreBuilder {
    data_dir: Option<PathBuf>,
}

impl TaskStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { data_dir: None }
    }

    /// Sets a custom data directory.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/taskmate` or `~/.local/share/taskmate`
    pub fn with_data_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `TaskmateError::XdgDirectory` if no data directory can be
    /// resolved, or `TaskmateError::FileSystem` if it cannot be created.
    pub fn build(self) -> Result<TaskStore> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => Self::default_data_dir()?,
        };

        std::fs::create_dir_all(&data_dir).map_err(|e| TaskmateError::FileSystem {
            path: data_dir.clone(),
            source: e,
        })?;

        Ok(TaskStore::new(FileKvStore::new(data_dir)))
    }

    /// Returns the default data directory following the XDG Base Directory
    /// specification.
    fn default_data_dir() -> Result<PathBuf> {
        let key_path = xdg::BaseDirectories::with_prefix("taskmate")
            .place_data_file(STORAGE_KEY)
            .map_err(|e| TaskmateError::XdgDirectory(e.to_string()))?;

        key_path
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                TaskmateError::XdgDirectory("could not resolve a data directory".to_string())
            })
    }
}

impl Default for TaskStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
