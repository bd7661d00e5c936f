//! Core library for the TaskMate task tracker.
//!
//! This crate provides the business logic for a personal task list: the
//! task data model and its status lifecycle, pure sequence transitions,
//! single-key persistence, parameter validation, and markdown display
//! formatting. The view layer (the `tm` binary) sits on top and only
//! parses arguments and renders output.
//!
//! # Quick Start
//!
//! ```rust
//! use taskmate_core::{params::CreateTask, TaskList, TaskStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open the store (XDG data dir by default)
//! let store = TaskStore::builder().build()?;
//!
//! // The controller owns the in-memory working sequence
//! let mut tasks = TaskList::new(store);
//! tasks.refresh().await;
//!
//! // Create a task; it is prepended and persisted in full
//! let created = tasks
//!     .create_task(&CreateTask {
//!         title: "Finish the design review".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{created}");
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use controller::TaskList;
pub use display::{CreateResult, DeleteResult, OperationStatus, Tasks, UpdateResult};
pub use error::{Result, TaskmateError};
pub use models::{StatusFilter, Task, TaskStatus};
pub use params::{CreateTask, DeleteTask, ListTasks, TaskId};
pub use store::{TaskStore, TaskStoreBuilder, STORAGE_KEY};
