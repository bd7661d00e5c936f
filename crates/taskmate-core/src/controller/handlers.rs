//! Task operations: compute the new sequence, update visible state, persist.

use uuid::Uuid;

use super::{transitions, TaskList};
use crate::error::{Result, TaskmateError};
use crate::models::{StatusFilter, Task};
use crate::params::{CreateTask, DeleteTask, TaskId};

impl TaskList {
    /// Reloads the working sequence from the store, replacing it wholesale.
    ///
    /// This is the view-activation reload: a list view calls it when it
    /// comes into focus, which is also how a task added elsewhere becomes
    /// visible without any value being passed back.
    pub async fn refresh(&mut self) {
        self.tasks = self.store.load_tasks().await;
    }

    /// Creates a new task from the given parameters.
    ///
    /// The validated draft receives a fresh unique id and is prepended to
    /// the sequence (newest first); the combined sequence is persisted in
    /// full. The in-memory state reflects the new task even if the write
    /// later fails.
    ///
    /// # Errors
    ///
    /// Returns `TaskmateError::InvalidInput` if validation rejects the
    /// parameters; nothing is persisted in that case.
    pub async fn create_task(&mut self, params: &CreateTask) -> Result<Task> {
        let task = params.validate()?.into_task(Uuid::new_v4().to_string());

        self.tasks = transitions::prepended(&self.tasks, task.clone());
        self.store.save_tasks(&self.tasks).await;

        Ok(task)
    }

    /// Advances a task's status one step in the cycling table.
    ///
    /// Returns the replacement record, or `None` when no task has the given
    /// id (nothing is persisted then).
    pub async fn toggle_task(&mut self, params: &TaskId) -> Option<Task> {
        let (next, updated) = transitions::toggled(&self.tasks, &params.id)?;

        self.tasks = next;
        self.store.save_tasks(&self.tasks).await;

        Some(updated)
    }

    /// Permanently removes a task by identity.
    ///
    /// Uses a get-before-delete pattern so the removed record can be shown
    /// for confirmation. Returns `Ok(None)` when no task has the given id.
    ///
    /// # Errors
    ///
    /// Returns `TaskmateError::InvalidInput` if the `confirmed` field is
    /// false; the sequence is untouched in that case.
    pub async fn delete_task(&mut self, params: &DeleteTask) -> Result<Option<Task>> {
        if !params.confirmed {
            return Err(TaskmateError::invalid_input("confirmed").with_reason(
                "Task deletion requires explicit confirmation. \
                 Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let Some((next, removed)) = transitions::removed(&self.tasks, &params.id) else {
            return Ok(None);
        };

        self.tasks = next;
        self.store.save_tasks(&self.tasks).await;

        Ok(Some(removed))
    }

    /// Projects the visible subset of the working sequence under a filter.
    pub fn filtered_tasks(&self, filter: StatusFilter) -> Vec<Task> {
        transitions::filtered(&self.tasks, filter)
    }
}
