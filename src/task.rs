//! Task entity
//!
//! A [`Task`] can only be obtained through validating constructors, so a
//! value in hand always has a positive id, a non-blank trimmed title and an
//! allowed status. There are no setters: changing a task means building a
//! new value with the same id (see [`Task::with_status`]).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::status::Status;

/// One unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord", into = "TaskRecord")]
pub struct Task {
    id: u64,
    title: String,
    description: Option<String>,
    status: Status,
}

/// Unvalidated on-disk shape of a task
///
/// The status is kept free-form so that a bad record can be read and
/// rejected by [`Task::try_from`] instead of failing deserialization of the
/// whole document. Negative or fractional ids fail at the field itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
}

impl Task {
    /// Build a validated task; the title is stored trimmed
    pub fn new(
        id: u64,
        title: &str,
        description: Option<String>,
        status: Status,
    ) -> Result<Self> {
        if id == 0 {
            return Err(Error::validation("Task id must be positive integer"));
        }
        let title = validate_title(title)?;
        Ok(Self {
            id,
            title: title.to_string(),
            description,
            status,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// A copy of this task carrying a different status
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

}

impl TryFrom<TaskRecord> for Task {
    type Error = Error;

    fn try_from(record: TaskRecord) -> Result<Self> {
        let status = record.status.parse::<Status>()?;
        Task::new(record.id, &record.title, record.description, status)
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        TaskRecord {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status.as_str().to_string(),
        }
    }
}

/// Trim a title and reject it when nothing is left
pub fn validate_title(title: &str) -> Result<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("Title cannot be blank"));
    }
    Ok(trimmed)
}
