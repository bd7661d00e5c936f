//! Status enumeration and lifecycle table for tasks.

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task statuses.
///
/// Statuses cycle through a fixed, non-linear table: a completed task
/// toggles back to `Pending`, never to `Todo`. Stored values outside the
/// three named states deserialize as [`TaskStatus::Unknown`], which is
/// displayed as To Do and restarts the cycle on the next toggle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task has not been started
    Todo,

    /// Task is being worked on
    Pending,

    /// Task has been completed
    Done,

    /// Catch-all for stored records whose status is missing or unrecognized
    #[default]
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Convert to the canonical storage string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Pending => "pending",
            TaskStatus::Done => "done",
            TaskStatus::Unknown => "unknown",
        }
    }

    /// The next status in the fixed cycling table.
    ///
    /// The table is total: `Todo` advances to `Pending`, `Pending` to
    /// `Done`, `Done` returns to `Pending`, and anything unrecognized
    /// restarts at `Todo`.
    pub fn next(self) -> TaskStatus {
        match self {
            TaskStatus::Todo => TaskStatus::Pending,
            TaskStatus::Pending => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Pending,
            TaskStatus::Unknown => TaskStatus::Todo,
        }
    }

    /// Human-readable badge label.
    ///
    /// Unrecognized statuses read as To Do for display purposes.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo | TaskStatus::Unknown => "To Do",
            TaskStatus::Pending => "Pending",
            TaskStatus::Done => "Done",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskmate_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(TaskStatus::Pending.with_icon(), "➤ Pending");
    /// assert_eq!(TaskStatus::Todo.with_icon(), "○ To Do");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Done => "✓ Done",
            TaskStatus::Pending => "➤ Pending",
            TaskStatus::Todo | TaskStatus::Unknown => "○ To Do",
        }
    }
}
