//! Result wrapper types for displaying operation outcomes.
//!
//! These wrappers format the results of create, toggle, and delete
//! operations with consistent messaging and resource display.

use std::fmt;

use crate::models::Task;

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Can track and display the specific changes made, so a status toggle can
/// tell the user where in the cycle the task landed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted task '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn create_test_task() -> Task {
        Task {
            id: "task-7".to_string(),
            title: "Ship the release".to_string(),
            description: String::new(),
            category: "Mobile".to_string(),
            due_date: Some("2025-09-20".to_string()),
            status: TaskStatus::Pending,
        }
    }

    #[test]
    fn test_create_result_display() {
        let output = format!("{}", CreateResult::new(create_test_task()));
        assert!(output.contains("Added task with ID: task-7"));
        assert!(output.contains("Ship the release"));
    }

    #[test]
    fn test_update_result_display_with_changes() {
        let result = UpdateResult::with_changes(
            create_test_task(),
            vec!["Status is now Pending".to_string()],
        );
        let output = format!("{}", result);

        assert!(output.contains("Updated task with ID: task-7"));
        assert!(output.contains("Changes made:"));
        assert!(output.contains("Status is now Pending"));
    }

    #[test]
    fn test_delete_result_display() {
        let output = format!("{}", DeleteResult::new(create_test_task()));
        assert!(output.contains("Deleted task 'Ship the release' (ID: task-7)"));
    }
}
