//! Case-insensitive substring search

use crate::error::{Error, Result};
use crate::task::Task;

/// Tasks whose title or description contains `query`, ignoring case
///
/// The query must contain something other than whitespace. Matching uses
/// the query as given (surrounding spaces included). Results keep the
/// input order; there is no ranking.
pub fn search(tasks: Vec<Task>, query: &str) -> Result<Vec<Task>> {
    if query.trim().is_empty() {
        return Err(Error::validation("Search query cannot be blank"));
    }
    let needle = query.to_lowercase();
    Ok(tasks
        .into_iter()
        .filter(|task| matches(task, &needle))
        .collect())
}

fn matches(task: &Task, needle: &str) -> bool {
    task.title().to_lowercase().contains(needle)
        || task
            .description()
            .is_some_and(|description| description.to_lowercase().contains(needle))
}
