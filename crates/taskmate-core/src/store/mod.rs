//! Single-key persistence for the task sequence.
//!
//! The entire task list is one serialized value stored under one fixed key
//! in an opaque asynchronous string store ([`kv::FileKvStore`]). Every save
//! rewrites the whole sequence; every load parses it back wholesale. There
//! are no partial reads, no versioning, and no migration between schema
//! versions.
//!
//! Both operations fail soft: read, parse, and write errors are logged and
//! swallowed, so callers never observe an error from [`TaskStore`]. After a
//! swallowed write failure the in-memory sequence diverges from the durable
//! copy until the next successful save.

use log::{debug, error};

use crate::error::Result;
use crate::models::Task;

pub mod kv;

mod builder;

pub use builder::TaskStoreBuilder;
pub use kv::FileKvStore;

/// Fixed key the full task sequence is stored under.
pub const STORAGE_KEY: &str = "TASKMATE_TASKS";

/// Persistence boundary reading and writing the entire task sequence as one
/// serialized value under one key.
pub struct TaskStore {
    kv: FileKvStore,
}

impl TaskStore {
    /// Creates a store over the given key-value backend.
    pub(crate) fn new(kv: FileKvStore) -> Self {
        Self { kv }
    }

    /// Creates a builder for configuring a store.
    pub fn builder() -> TaskStoreBuilder {
        TaskStoreBuilder::new()
    }

    /// Loads the persisted task sequence.
    ///
    /// An absent key yields an empty sequence. Read and parse errors are
    /// logged and also yield an empty sequence.
    pub async fn load_tasks(&self) -> Vec<Task> {
        match self.try_load().await {
            Ok(tasks) => {
                debug!("loaded {} tasks", tasks.len());
                tasks
            }
            Err(e) => {
                error!("failed to load tasks: {e}");
                Vec::new()
            }
        }
    }

    /// Persists the entire task sequence, replacing any prior value.
    ///
    /// Write errors are logged and swallowed; the caller is not notified.
    pub async fn save_tasks(&self, tasks: &[Task]) {
        if let Err(e) = self.try_save(tasks).await {
            error!("failed to save tasks: {e}");
        }
    }

    async fn try_load(&self) -> Result<Vec<Task>> {
        match self.kv.get(STORAGE_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn try_save(&self, tasks: &[Task]) -> Result<()> {
        let raw = serde_json::to_string(tasks)?;
        debug!("saving {} tasks", tasks.len());
        self.kv.set(STORAGE_KEY, raw).await
    }
}
