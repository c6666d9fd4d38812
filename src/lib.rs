//! tasks - personal task tracking library
//!
//! This library provides the core of the `tasks` CLI: a small validated
//! domain model persisted to a local JSON file.
//!
//! # Core Concepts
//!
//! - **Task**: immutable record with id, title, optional description, status
//! - **Document**: the on-disk JSON (`schema_version` + ordered `tasks`)
//! - **Atomic write**: write a sibling temp file, then rename it into place
//! - **Corruption recovery**: move an unreadable file aside and start empty
//!
//! # Module Organization
//!
//! - `status`: allowed lifecycle labels
//! - `task`: the validated task entity and its on-disk record
//! - `repository`: load, validate, recover and atomically persist the document
//! - `atomic`: temp-file-then-rename writes
//! - `services`: id allocation, status filtering, search, sample seeding
//! - `config`: `.tasks.toml` loading
//! - `error`: error types and result alias
//! - `output`: human and JSON rendering for the CLI
//! - `cli`: command-line interface using clap

pub mod atomic;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod repository;
pub mod services;
pub mod status;
pub mod task;

pub use error::{Error, Result};
pub use repository::Repository;
pub use status::Status;
pub use task::Task;
