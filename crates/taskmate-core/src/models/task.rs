//! Task model definition.

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// A single user-tracked to-do item.
///
/// Field names serialize in camelCase so the stored records keep the
/// `id, title, description, category, dueDate, status` wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned at creation, immutable
    pub id: String,

    /// Short title; never empty once saved
    pub title: String,

    /// Free-form details; may be empty
    #[serde(default)]
    pub description: String,

    /// Free-form grouping label; the display palette recognizes a few
    #[serde(default)]
    pub category: String,

    /// Due date in `YYYY-MM-DD` form, used for display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Current lifecycle status
    #[serde(default)]
    pub status: TaskStatus,
}
