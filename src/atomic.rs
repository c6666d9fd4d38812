//! Atomic file replacement
//!
//! Data is written in full to a sibling temp file, flushed, and then
//! renamed over the target. Readers see either the old file or the new one,
//! never a half-written document.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Sibling path used while a write to `path` is in flight
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("tasks"));
    name.push(format!(".tmp.{}", std::process::id()));
    path.with_file_name(name)
}

/// Atomically write data to a file
///
/// Any failure is reported as [`Error::AtomicWrite`]; the previously
/// committed file at `path` is left untouched.
pub fn write_atomic(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    match write_then_rename(path, &temp_path, data) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), bytes = data.len(), "atomic write committed");
            Ok(())
        }
        Err(source) => {
            // Best effort: the live file is intact either way.
            let _ = fs::remove_file(&temp_path);
            Err(Error::AtomicWrite {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Atomically write string data to a file
pub fn write_atomic_str(path: impl AsRef<Path>, data: &str) -> Result<()> {
    write_atomic(path, data.as_bytes())
}

fn write_then_rename(path: &Path, temp_path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut temp_file = File::create(temp_path)?;
    temp_file.write_all(data)?;
    temp_file.sync_all()?;
    drop(temp_file);

    fs::rename(temp_path, path)
}
