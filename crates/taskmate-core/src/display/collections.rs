//! Collection wrapper types for displaying groups of tasks.

use std::fmt;

use crate::models::Task;

/// Newtype wrapper for displaying a sequence of tasks.
///
/// Formats each task with its own Display implementation and handles the
/// empty list gracefully.
///
/// # Examples
///
/// ```rust
/// use taskmate_core::{display::Tasks, models::{Task, TaskStatus}};
///
/// let task = Task {
///     id: "task-1".to_string(),
///     title: "Write the report".to_string(),
///     description: String::new(),
///     category: "Mobile".to_string(),
///     due_date: Some("2025-09-20".to_string()),
///     status: TaskStatus::Todo,
/// };
///
/// let tasks = Tasks(vec![task]);
/// let output = format!("{}", tasks);
/// assert!(output.contains("Write the report"));
/// ```
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{}", task)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn create_test_task(id: &str, title: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: "Needs a second pass".to_string(),
            category: "RPL".to_string(),
            due_date: Some("2025-09-20".to_string()),
            status,
        }
    }

    #[test]
    fn test_tasks_display_empty() {
        let tasks = Tasks(vec![]);
        assert_eq!(format!("{}", tasks), "No tasks found.\n");
    }

    #[test]
    fn test_tasks_display_single_task() {
        let tasks = Tasks(vec![create_test_task("t1", "Refactor parser", TaskStatus::Todo)]);
        let output = format!("{}", tasks);

        assert!(output.contains("Refactor parser"));
        assert!(output.contains("○ To Do"));
        assert!(output.contains("- ID: t1"));
        assert!(output.contains("- Category: RPL"));
        assert!(output.contains("- Due: 2025-09-20"));
        assert!(output.contains("Needs a second pass"));
    }

    #[test]
    fn test_tasks_display_multiple_tasks() {
        let tasks = Tasks(vec![
            create_test_task("t1", "Refactor parser", TaskStatus::Pending),
            create_test_task("t2", "Ship the release", TaskStatus::Done),
        ]);
        let output = format!("{}", tasks);

        assert!(output.contains("Refactor parser"));
        assert!(output.contains("➤ Pending"));
        assert!(output.contains("Ship the release"));
        assert!(output.contains("✓ Done"));
    }
}
