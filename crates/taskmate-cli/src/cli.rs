//! Command handlers binding the task list controller to the terminal
//! renderer.
//!
//! Each handler follows the same shape: reload the working sequence on
//! activation, run the operation, render the outcome.

use anyhow::Result;
use taskmate_core::display::{CreateResult, DeleteResult, OperationStatus, Tasks, UpdateResult};
use taskmate_core::params::{CreateTask, DeleteTask, ListTasks, TaskId};
use taskmate_core::{TaskList, TaskStore};

use crate::renderer::TerminalRenderer;

/// Dispatches parsed commands against the controller and renders results.
pub struct Cli {
    tasks: TaskList,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Creates a handler over a fresh controller for the given store.
    pub fn new(store: TaskStore, renderer: TerminalRenderer) -> Self {
        Self {
            tasks: TaskList::new(store),
            renderer,
        }
    }

    /// Lists tasks under the selected status filter.
    pub async fn list_tasks(mut self, params: &ListTasks) -> Result<()> {
        self.tasks.refresh().await;

        let visible = Tasks(self.tasks.filtered_tasks(params.filter));
        self.renderer
            .render(&format!("# Tasks ({})\n\n{}", params.filter.label(), visible))
    }

    /// Adds a new task and shows the created record.
    ///
    /// Validation failures (a blank title, a malformed due date) surface as
    /// errors without touching the store.
    pub async fn add_task(mut self, params: &CreateTask) -> Result<()> {
        self.tasks.refresh().await;

        let task = self.tasks.create_task(params).await?;
        self.renderer.render(&format!("{}", CreateResult::new(task)))
    }

    /// Cycles a task's status and shows the updated record.
    pub async fn toggle_task(mut self, params: &TaskId) -> Result<()> {
        self.tasks.refresh().await;

        match self.tasks.toggle_task(params).await {
            Some(task) => {
                let change = format!("Status is now {}", task.status.label());
                self.renderer
                    .render(&format!("{}", UpdateResult::with_changes(task, vec![change])))
            }
            None => self.render_not_found(&params.id),
        }
    }

    /// Deletes a task after explicit confirmation.
    pub async fn delete_task(mut self, params: &DeleteTask) -> Result<()> {
        self.tasks.refresh().await;

        match self.tasks.delete_task(params).await? {
            Some(task) => self.renderer.render(&format!("{}", DeleteResult::new(task))),
            None => self.render_not_found(&params.id),
        }
    }

    fn render_not_found(&self, id: &str) -> Result<()> {
        self.renderer.render(&format!(
            "{}",
            OperationStatus::failure(format!("No task with ID {id}"))
        ))
    }
}
