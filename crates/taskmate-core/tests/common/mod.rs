use taskmate_core::{Task, TaskStatus, TaskStore};
use tempfile::TempDir;

/// Helper function to create a store backed by a temporary directory
pub fn create_test_store() -> (TempDir, TaskStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = TaskStore::builder()
        .with_data_dir(Some(temp_dir.path()))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Helper function to build a task record with a fresh unique id
pub fn sample_task(title: &str, status: TaskStatus) -> Task {
    Task {
        id: uuid::Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: String::new(),
        category: "Mobile".to_string(),
        due_date: Some("2025-09-20".to_string()),
        status,
    }
}
