//! JSON-backed task repository
//!
//! The repository is the only component that touches the data file. It owns
//! the whole document lifecycle:
//!
//! ```text
//! tasks.json                    # live document
//! tasks.json.tmp.<pid>          # in-flight atomic write (renamed over the live file)
//! tasks.json.bak-<timestamp>    # corrupt documents moved aside on load
//! ```
//!
//! Reads are lenient: records that fail [`Task`] validation are skipped in
//! the returned sequences but kept verbatim in the document, so rewriting
//! the file never loses data the reader did not understand.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::atomic;
use crate::error::{Error, Result};
use crate::task::Task;

/// Current on-disk format version, stamped on every write
pub const SCHEMA_VERSION: u64 = 1;

/// Data file name used when nothing else is configured
pub const DEFAULT_FILE_NAME: &str = "tasks.json";

/// Full on-disk document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub schema_version: u64,
    /// Raw records in insertion order, valid or not
    pub tasks: Vec<Value>,
    /// Unknown top-level keys, carried through rewrites
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// The base document: current version, no tasks
    pub fn empty() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            tasks: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Decode every valid record, skipping the rest, preserving order
    pub fn valid_tasks(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .enumerate()
            .filter_map(|(index, record)| match Task::deserialize(record) {
                Ok(task) => Some(task),
                Err(err) => {
                    tracing::debug!(index, error = %err, "skipping invalid task record");
                    None
                }
            })
            .collect()
    }

    /// Position and decoded value of the valid record with this id
    fn find(&self, id: u64) -> Option<(usize, Task)> {
        self.tasks.iter().enumerate().find_map(|(index, record)| {
            Task::deserialize(record)
                .ok()
                .filter(|task| task.id() == id)
                .map(|task| (index, task))
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

/// Result of loading the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Valid tasks in on-disk order
    pub tasks: Vec<Task>,
    /// Set when the file was corrupt and has been reset
    pub recovery: Option<Recovery>,
}

/// Details of a corrupt-store reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    /// Where the corrupt file was moved, if moving it succeeded
    pub backup: Option<PathBuf>,
}

/// Task repository over a single JSON file
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
    pretty: bool,
}

impl Repository {
    /// Create a repository for the given data file
    ///
    /// Nothing touches the disk until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    /// Pretty-print the document on write
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path to the live data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Load all valid tasks
    ///
    /// A corrupt store is reset (see [`Repository::read_document`]) and
    /// yields an empty list rather than an error.
    pub fn load_all(&self) -> Result<Vec<Task>> {
        Ok(self.load()?.tasks)
    }

    /// Load all valid tasks, reporting whether a corrupt store was reset
    pub fn load(&self) -> Result<LoadReport> {
        match self.read_document() {
            Ok(document) => Ok(LoadReport {
                tasks: document.valid_tasks(),
                recovery: None,
            }),
            Err(Error::CorruptData { backup, .. }) => Ok(LoadReport {
                tasks: Vec::new(),
                recovery: Some(Recovery { backup }),
            }),
            Err(err) => Err(err),
        }
    }

    /// Read the raw document, creating or recovering the file as needed
    ///
    /// - Missing file: the base document is written and returned.
    /// - Unparsable file, or `schema_version`/`tasks` missing: the file is
    ///   moved to a fresh backup path, the base document is written, and
    ///   [`Error::CorruptData`] is returned. The store is usable afterwards.
    pub fn read_document(&self) -> Result<Document> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "creating empty task file");
            let document = Document::empty();
            self.write_document(&document)?;
            return Ok(document);
        }

        let raw = fs::read(&self.path)?;
        match serde_json::from_slice::<Document>(&raw) {
            Ok(document) => {
                tracing::debug!(
                    path = %self.path.display(),
                    records = document.tasks.len(),
                    "loaded task file"
                );
                Ok(document)
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "task file is corrupt");
                let backup = self.reset_corrupt()?;
                Err(Error::CorruptData {
                    path: self.path.clone(),
                    backup,
                })
            }
        }
    }

    // =========================================================================
    // Writes (read-modify-rewrite of the whole document)
    // =========================================================================

    /// Append a new task to the end of the document
    pub fn save_new(&self, task: &Task) -> Result<()> {
        let mut document = self.read_document_or_empty()?;
        document.tasks.push(serde_json::to_value(task)?);
        self.write_document(&document)?;
        tracing::debug!(id = task.id(), "saved new task");
        Ok(())
    }

    /// Replace the stored record that has the same id, keeping its position
    ///
    /// Returns the task as it was before the write.
    pub fn replace(&self, task: &Task) -> Result<Task> {
        let mut document = self.read_document_or_empty()?;
        let (index, previous) = document
            .find(task.id())
            .ok_or(Error::TaskNotFound(task.id()))?;
        document.tasks[index] = serde_json::to_value(task)?;
        self.write_document(&document)?;
        tracing::debug!(id = task.id(), "replaced task");
        Ok(previous)
    }

    /// Remove the task with this id from the document
    pub fn remove(&self, id: u64) -> Result<Task> {
        let mut document = self.read_document_or_empty()?;
        let (index, removed) = document.find(id).ok_or(Error::TaskNotFound(id))?;
        document.tasks.remove(index);
        self.write_document(&document)?;
        tracing::debug!(id, "removed task");
        Ok(removed)
    }

    /// Stamp the current schema version and atomically replace the file
    pub fn write_document(&self, document: &Document) -> Result<()> {
        let mut document = document.clone();
        document.schema_version = SCHEMA_VERSION;
        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        atomic::write_atomic_str(&self.path, &json)
    }

    // =========================================================================
    // Corruption recovery
    // =========================================================================

    /// Backup path for the current file that does not exist yet
    ///
    /// `<name>.bak-<UTC timestamp with microseconds>`, with a `-<n>` counter
    /// appended when that name is already taken.
    pub fn backup_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.6fZ");
        let base = format!("{name}.bak-{stamp}");

        let mut candidate = self.path.with_file_name(&base);
        let mut counter = 1u32;
        while candidate.exists() {
            candidate = self.path.with_file_name(format!("{base}-{counter}"));
            counter += 1;
        }
        candidate
    }

    fn reset_corrupt(&self) -> Result<Option<PathBuf>> {
        let backup = self.backup_path();
        let backup = match fs::rename(&self.path, &backup) {
            Ok(()) => {
                tracing::warn!(backup = %backup.display(), "moved corrupt task file aside");
                Some(backup)
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "could not back up corrupt task file"
                );
                None
            }
        };
        self.write_document(&Document::empty())?;
        Ok(backup)
    }

    fn read_document_or_empty(&self) -> Result<Document> {
        match self.read_document() {
            Err(Error::CorruptData { .. }) => Ok(Document::empty()),
            other => other,
        }
    }
}
