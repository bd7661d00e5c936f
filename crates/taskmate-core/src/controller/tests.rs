use super::transitions::{filtered, prepended, removed, toggled};
use crate::models::{StatusFilter, Task, TaskStatus};

fn task(id: &str, title: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category: "Mobile".to_string(),
        due_date: Some("2025-09-20".to_string()),
        status,
    }
}

#[test]
fn test_toggled_replaces_matching_record() {
    let tasks = vec![
        task("a", "First", TaskStatus::Todo),
        task("b", "Second", TaskStatus::Done),
    ];

    let (next, updated) = toggled(&tasks, "a").expect("task should be found");

    assert_eq!(updated.id, "a");
    assert_eq!(updated.status, TaskStatus::Pending);
    assert_eq!(next[0].status, TaskStatus::Pending);
    assert_eq!(next[1], tasks[1]);
    assert_eq!(next.len(), 2);
}

#[test]
fn test_toggled_missing_id_is_none() {
    let tasks = vec![task("a", "First", TaskStatus::Todo)];
    assert!(toggled(&tasks, "nope").is_none());
}

#[test]
fn test_toggled_unknown_status_restarts_at_todo() {
    let tasks = vec![task("a", "First", TaskStatus::Unknown)];

    let (_, updated) = toggled(&tasks, "a").expect("task should be found");
    assert_eq!(updated.status, TaskStatus::Todo);
}

#[test]
fn test_removed_drops_only_matching_task() {
    let tasks = vec![
        task("a", "First", TaskStatus::Todo),
        task("b", "Second", TaskStatus::Pending),
        task("c", "Third", TaskStatus::Done),
    ];

    let (next, gone) = removed(&tasks, "b").expect("task should be found");

    assert_eq!(gone.id, "b");
    assert_eq!(next.len(), 2);
    assert!(next.iter().all(|t| t.id != "b"));
    assert_eq!(next[0], tasks[0]);
    assert_eq!(next[1], tasks[2]);
}

#[test]
fn test_removed_missing_id_is_none() {
    let tasks = vec![task("a", "First", TaskStatus::Todo)];
    assert!(removed(&tasks, "nope").is_none());
}

#[test]
fn test_prepended_puts_newest_first() {
    let tasks = vec![task("a", "Old", TaskStatus::Done)];

    let next = prepended(&tasks, task("b", "New", TaskStatus::Todo));

    assert_eq!(next.len(), 2);
    assert_eq!(next[0].id, "b");
    assert_eq!(next[1].id, "a");
}

#[test]
fn test_filtered_projects_exact_matches_in_order() {
    let tasks = vec![
        task("a", "First", TaskStatus::Done),
        task("b", "Second", TaskStatus::Todo),
        task("c", "Third", TaskStatus::Done),
        task("d", "Fourth", TaskStatus::Pending),
    ];

    let done = filtered(&tasks, StatusFilter::Done);
    let ids: Vec<&str> = done.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_filtered_all_keeps_everything() {
    let tasks = vec![
        task("a", "First", TaskStatus::Todo),
        task("b", "Second", TaskStatus::Unknown),
    ];

    assert_eq!(filtered(&tasks, StatusFilter::All), tasks);
}
