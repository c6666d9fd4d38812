#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// Scratch working directory for one test
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Default data file location for commands run in this directory
    pub fn tasks_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read_json(&self, rel_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(self.dir.path().join(rel_path))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Backup files left behind by corruption recovery
    pub fn backups(&self) -> Vec<PathBuf> {
        let mut found: Vec<PathBuf> = fs::read_dir(self.dir.path())
            .expect("read tempdir")
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| {
                path.file_name()
                    .map(|name| name.to_string_lossy().starts_with("tasks.json.bak-"))
                    .unwrap_or(false)
            })
            .collect();
        found.sort();
        found
    }

    /// `tasks` binary running in this directory with a clean environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tasks").expect("binary");
        cmd.current_dir(self.dir.path())
            .env_remove("TASKS_FILE")
            .env_remove("TASKS_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Parse a command's stdout as a single JSON value
pub fn stdout_json(output: &std::process::Output) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::from_slice(&output.stdout)?)
}
