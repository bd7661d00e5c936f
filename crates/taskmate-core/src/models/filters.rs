//! Display-only status filtering for the task list view.

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// Mutually exclusive filter modes selecting a subset of tasks by status.
///
/// Filtering is a pure projection over the in-memory sequence; it is
/// recomputed on every render and never touches persisted state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Show every task
    #[default]
    All,

    /// Only tasks not yet started
    Todo,

    /// Only tasks in progress
    Pending,

    /// Only completed tasks
    Done,
}

impl StatusFilter {
    /// Whether a task with the given status is visible under this filter.
    ///
    /// The three named modes are exact status matches; an unrecognized
    /// status is only visible under `All`.
    pub fn matches(&self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Todo => status == TaskStatus::Todo,
            StatusFilter::Pending => status == TaskStatus::Pending,
            StatusFilter::Done => status == TaskStatus::Done,
        }
    }

    /// Human-readable label for list headings.
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Todo => "To Do",
            StatusFilter::Pending => "Pending",
            StatusFilter::Done => "Done",
        }
    }
}
