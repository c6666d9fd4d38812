//! Error types for tasks
//!
//! Exit codes:
//! - 0: Success
//! - 1: User error (bad title/status/query, unknown id, bad config)
//! - 4: Operation failed (the store could not be written or read)

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the tasks CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 1;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for task operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 1)
    #[error("{0}")]
    Validation(String),

    #[error("Task {0} not found")]
    TaskNotFound(u64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Informational: the store was reset and the old file moved aside
    #[error("Corrupt task file {} was reset{}", path.display(), backup_suffix(backup.as_ref()))]
    CorruptData {
        path: PathBuf,
        backup: Option<PathBuf>,
    },

    // Operation failures (exit code 4)
    #[error("Atomic write to {} failed: {}", path.display(), source)]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

fn backup_suffix(backup: Option<&PathBuf>) -> String {
    match backup {
        Some(path) => format!("; backed up to {}", path.display()),
        None => "; no backup could be made".to_string(),
    }
}

impl Error {
    /// Shorthand for a validation failure with a user-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Validation(_) | Error::TaskNotFound(_) | Error::InvalidConfig(_) => {
                exit_codes::USER_ERROR
            }

            Error::CorruptData { .. }
            | Error::AtomicWrite { .. }
            | Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Short machine-readable label used as the JSON error `type`
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation",
            Error::TaskNotFound(_) => "not_found",
            Error::InvalidConfig(_) | Error::TomlParse(_) => "config",
            Error::CorruptData { .. } => "corrupt_data",
            Error::AtomicWrite { .. } => "atomic_write",
            Error::Io(_) => "io",
            Error::Json(_) => "json",
        }
    }
}

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
