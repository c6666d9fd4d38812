//! Task lifecycle status

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Allowed status labels, in lifecycle order
pub const ALLOWED_STATUSES: [&str; 3] = ["todo", "in-progress", "done"];

/// Lifecycle label of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }

    /// True iff `value` is exactly one of the allowed labels
    pub fn is_valid(value: &str) -> bool {
        ALLOWED_STATUSES.contains(&value)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| {
                Error::validation(format!(
                    "Invalid status '{}'. Allowed: {}",
                    value,
                    ALLOWED_STATUSES.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_valid_accepts_only_exact_labels() {
        assert!(Status::is_valid("todo"));
        assert!(Status::is_valid("in-progress"));
        assert!(Status::is_valid("done"));
        assert!(!Status::is_valid("Done"));
        assert!(!Status::is_valid(" todo"));
        assert!(!Status::is_valid("in_progress"));
        assert!(!Status::is_valid(""));
    }

    #[test]
    fn parse_round_trips_labels() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn parse_rejects_unknown_label() {
        let err = "blocked".parse::<Status>().unwrap_err();
        assert!(err.to_string().contains("Invalid status 'blocked'"));
        assert!(err.to_string().contains("todo, in-progress, done"));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        assert_eq!(Status::default(), Status::Todo);
    }
}
