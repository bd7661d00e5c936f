//! Pure transition functions over task sequences.
//!
//! Every mutation of the visible list is a function from the current
//! sequence to a new one; persistence is layered on separately by
//! [`TaskList`](super::TaskList). Matched records are replaced, never
//! mutated in place.

use crate::models::{StatusFilter, Task};

/// Returns the sequence with the matched task's status advanced one step in
/// the cycling table, plus the replacement record.
///
/// Returns `None` when no task has the given id.
pub fn toggled(tasks: &[Task], id: &str) -> Option<(Vec<Task>, Task)> {
    let updated = tasks.iter().find(|t| t.id == id).map(|t| Task {
        status: t.status.next(),
        ..t.clone()
    })?;

    let next = tasks
        .iter()
        .map(|t| if t.id == id { updated.clone() } else { t.clone() })
        .collect();

    Some((next, updated))
}

/// Returns the sequence without the matched task, plus the removed record.
///
/// All other elements are unchanged. Returns `None` when no task has the
/// given id.
pub fn removed(tasks: &[Task], id: &str) -> Option<(Vec<Task>, Task)> {
    let removed = tasks.iter().find(|t| t.id == id)?.clone();
    let next = tasks.iter().filter(|t| t.id != id).cloned().collect();

    Some((next, removed))
}

/// Returns the sequence with the new task in front (newest-first ordering).
pub fn prepended(tasks: &[Task], task: Task) -> Vec<Task> {
    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.push(task);
    next.extend(tasks.iter().cloned());
    next
}

/// Projects the subset of tasks visible under the given filter, preserving
/// relative order.
pub fn filtered(tasks: &[Task], filter: StatusFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| filter.matches(t.status))
        .cloned()
        .collect()
}
