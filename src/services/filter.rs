//! Status filtering

use crate::status::Status;
use crate::task::Task;

/// Keep the tasks whose status equals `status`
///
/// `None` keeps everything. A label outside the allowed set matches
/// nothing; it is not an error.
pub fn filter_by_status(tasks: Vec<Task>, status: Option<&str>) -> Vec<Task> {
    let Some(label) = status else {
        return tasks;
    };
    match label.parse::<Status>() {
        Ok(wanted) => tasks
            .into_iter()
            .filter(|task| task.status() == wanted)
            .collect(),
        Err(_) => Vec::new(),
    }
}
