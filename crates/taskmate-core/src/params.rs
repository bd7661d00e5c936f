//! Parameter structures for task operations.
//!
//! Shared parameter types usable from any interface (CLI today, anything
//! else later) without framework-specific derives. Interface layers define
//! their own argument structs and convert into these via `From`, keeping
//! argument-parsing concerns out of the core. Business validation lives
//! here, next to the types it validates.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskmateError};
use crate::models::{StatusFilter, Task, TaskStatus};

/// Category assigned to a new task when the caller does not provide one.
pub const DEFAULT_CATEGORY: &str = "Mobile";

/// Due date assigned to a new task when the caller does not provide one.
///
/// A fixed literal, not a computed date: every task created without an
/// explicit due date receives this exact value.
pub const DEFAULT_DUE_DATE: &str = "2025-09-20";

/// Generic parameters for operations addressing a single task.
///
/// Used for operations like toggle that match a task by identity only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskId {
    /// The ID of the task to operate on
    pub id: String,
}

/// Parameters for creating a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Title of the task (required, must be non-empty after trimming)
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Optional category; defaults to [`DEFAULT_CATEGORY`]
    pub category: Option<String>,
    /// Optional due date in `YYYY-MM-DD` form; defaults to
    /// [`DEFAULT_DUE_DATE`]
    pub due_date: Option<String>,
}

/// Parameters for deleting a task.
///
/// Deletion is permanent and requires explicit confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTask {
    /// ID of the task to delete
    pub id: String,
    /// Whether the caller confirmed the deletion
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for listing tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTasks {
    /// Status filter applied to the visible list
    #[serde(default)]
    pub filter: StatusFilter,
}

/// A validated, normalized draft produced by [`CreateTask::validate`].
///
/// Drafts carry everything a new record needs except its identity; the
/// controller assigns a fresh id when it materializes the task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    /// Trimmed, non-empty title
    pub title: String,
    /// Trimmed description; may be empty
    pub description: String,
    /// Category, defaulted when absent
    pub category: String,
    /// Due date, defaulted when absent
    pub due_date: String,
}

impl TaskDraft {
    /// Materialize the draft into a task record with the given id.
    ///
    /// New tasks always start in the `Todo` state.
    pub fn into_task(self, id: String) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            due_date: Some(self.due_date),
            status: TaskStatus::Todo,
        }
    }
}

impl CreateTask {
    /// Validate creation parameters and normalize them into a draft.
    ///
    /// The title is trimmed and must be non-empty afterwards. The
    /// description is trimmed unconditionally (empty is allowed). Category
    /// and due date fall back to their fixed defaults; a caller-supplied
    /// due date must be a real `YYYY-MM-DD` calendar date.
    ///
    /// # Errors
    ///
    /// * `TaskmateError::InvalidInput` - when the trimmed title is empty
    /// * `TaskmateError::InvalidInput` - when the due date is not a valid
    ///   `YYYY-MM-DD` date
    pub fn validate(&self) -> Result<TaskDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskmateError::invalid_input("title")
                .with_reason("Task title is required and cannot be blank"));
        }

        let due_date = match &self.due_date {
            Some(raw) => {
                jiff::civil::Date::strptime("%Y-%m-%d", raw).map_err(|_| {
                    TaskmateError::invalid_input("due_date")
                        .with_reason(format!("Invalid due date: {raw}. Expected YYYY-MM-DD"))
                })?;
                raw.clone()
            }
            None => DEFAULT_DUE_DATE.to_string(),
        };

        Ok(TaskDraft {
            title: title.to_string(),
            description: self
                .description
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            due_date,
        })
    }
}
