//! Configuration loading and management
//!
//! Handles parsing of the optional `.tasks.toml` configuration file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::repository::DEFAULT_FILE_NAME;
use crate::status::Status;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".tasks.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Data file settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Task defaults
    #[serde(default)]
    pub tasks: TasksConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StorageConfig {
    /// Data file path; relative paths resolve against the config's directory
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Pretty-print the JSON document on write
    #[serde(default)]
    pub pretty: bool,
}

/// Task-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TasksConfig {
    /// Status given to new tasks when none is specified
    #[serde(default = "default_status")]
    pub default_status: String,
}

fn default_status() -> String {
    Status::default().as_str().to_string()
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            default_status: default_status(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.validate()?;
        if let (Some(data), Some(base)) = (config.storage.path.as_ref(), path.parent()) {
            if data.is_relative() {
                config.storage.path = Some(base.join(data));
            }
        }
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `.tasks.toml` from a directory, or return defaults when absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Status for new tasks
    pub fn default_status(&self) -> Result<Status> {
        self.tasks
            .default_status
            .parse()
            .map_err(|err: Error| Error::InvalidConfig(format!("tasks.default_status: {err}")))
    }

    /// Data file location: explicit override, then config, then `tasks.json` in `cwd`
    pub fn data_path(&self, explicit: Option<&Path>, cwd: &Path) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.storage.path.clone())
            .unwrap_or_else(|| cwd.join(DEFAULT_FILE_NAME))
    }

    fn validate(&self) -> Result<()> {
        self.default_status()?;
        Ok(())
    }
}
