//! Command-line interface for tasks
//!
//! This module defines the CLI structure using clap derive macros.
//! Command bodies live in [`task`].

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;

mod task;

/// tasks - personal task tracker
///
/// Create, list, search, complete and delete short text tasks stored in a
/// local JSON file.
#[derive(Parser, Debug)]
#[command(name = "tasks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the task file (defaults to tasks.json in the current directory)
    #[arg(long, global = true, env = "TASKS_FILE")]
    pub file: Option<PathBuf>,

    /// Path to a configuration file (defaults to ./.tasks.toml when present)
    #[arg(long, global = true, env = "TASKS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new task
    Create {
        /// Task title (required, must not be blank)
        #[arg(long)]
        title: String,

        /// Optional description
        #[arg(long)]
        description: Option<String>,

        /// Initial status: todo, in-progress, done
        #[arg(long)]
        status: Option<String>,
    },

    /// List tasks, optionally filtered by status
    List {
        /// Only show tasks with this status
        #[arg(long)]
        status: Option<String>,
    },

    /// Search titles and descriptions (case-insensitive substring)
    Search {
        /// Substring to look for
        query: String,
    },

    /// Mark a task as done
    Complete {
        /// Task id
        id: u64,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: u64,
    },

    /// Add a few sample tasks
    Seed,
}

impl Commands {
    /// Command name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Create { .. } => "create",
            Commands::List { .. } => "list",
            Commands::Search { .. } => "search",
            Commands::Complete { .. } => "complete",
            Commands::Delete { .. } => "delete",
            Commands::Seed => "seed",
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        tracing::debug!(command = self.command.name(), "running command");
        match self.command {
            Commands::Create {
                title,
                description,
                status,
            } => task::run_create(task::CreateOptions {
                title,
                description,
                status,
                file: self.file,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List { status } => task::run_list(task::ListOptions {
                status,
                file: self.file,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Search { query } => task::run_search(task::SearchOptions {
                query,
                file: self.file,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Complete { id } => task::run_complete(task::CompleteOptions {
                id,
                file: self.file,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Delete { id } => task::run_delete(task::DeleteOptions {
                id,
                file: self.file,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Seed => task::run_seed(task::SeedOptions {
                file: self.file,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
