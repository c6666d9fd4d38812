//! Sample data for a fresh store

use crate::error::Result;
use crate::repository::Repository;
use crate::services::id::next_id;
use crate::status::Status;
use crate::task::Task;

/// Sample tasks as (title, description, status)
pub const SAMPLE_TASKS: [(&str, &str, Status); 3] = [
    ("Write spec", "Initial MVP document", Status::InProgress),
    ("Implement create", "CLI create command", Status::Todo),
    ("Add search", "Implement substring search", Status::Todo),
];

/// Save each sample task whose title is not already in the store
///
/// Returns the tasks that were added, in the order they were saved.
pub fn seed(repository: &Repository) -> Result<Vec<Task>> {
    let mut existing = repository.load_all()?;
    let mut added = Vec::new();

    for (title, description, status) in SAMPLE_TASKS {
        if existing.iter().any(|task| task.title() == title) {
            continue;
        }
        let task = Task::new(
            next_id(&existing)?,
            title,
            Some(description.to_string()),
            status,
        )?;
        repository.save_new(&task)?;
        existing.push(task.clone());
        added.push(task);
    }

    tracing::debug!(added = added.len(), "seeded sample tasks");
    Ok(added)
}
