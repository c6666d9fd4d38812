//! Shared output formatting for tasks CLI commands.
//!
//! The core never prints; every command hands its result to
//! [`emit_success`] or [`emit_error`] here.

use serde::Serialize;

use crate::error::{Error, JsonError, Result};
use crate::task::Task;

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone, Default)]
pub struct HumanOutput {
    lines: Vec<String>,
    warnings: Vec<String>,
}

impl HumanOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(value: impl Into<String>) -> Self {
        let mut output = Self::new();
        output.push_line(value);
        output
    }

    pub fn push_line(&mut self, value: impl Into<String>) {
        self.lines.push(value.into());
    }

    pub fn push_warning(&mut self, value: impl Into<String>) {
        self.warnings.push(value.into());
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    data: &T,
    human: &HumanOutput,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            #[serde(flatten)]
            data: &'a T,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            warnings: Vec<String>,
        }

        let payload = Envelope {
            data,
            warnings: human.warnings.clone(),
        };
        println!("{}", serde_json::to_string(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    for warning in human.warnings() {
        eprintln!("warning: {warning}");
    }
    if !human.lines.is_empty() {
        println!("{}", format_human(human));
    }
    Ok(())
}

pub fn emit_error(err: &Error, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct Envelope {
            error: JsonError,
        }

        let payload = Envelope {
            error: JsonError::from(err),
        };
        println!("{}", serde_json::to_string(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = error_hint(err) {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

pub fn format_human(output: &HumanOutput) -> String {
    output.lines.join("\n")
}

/// `[id] title (status)`, plus ` - description` when there is one
pub fn format_task_line(task: &Task) -> String {
    let mut line = format!("[{}] {} ({})", task.id(), task.title(), task.status());
    if let Some(description) = task.description().filter(|d| !d.is_empty()) {
        line.push_str(" - ");
        line.push_str(description);
    }
    line
}

/// One line per task, or `No tasks` for an empty list
pub fn format_tasks_human(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks".to_string();
    }
    tasks
        .iter()
        .map(format_task_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn error_hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::TaskNotFound(_) => Some("run `tasks list` to see existing ids"),
        Error::InvalidConfig(_) | Error::TomlParse(_) => Some("fix .tasks.toml then retry"),
        Error::AtomicWrite { .. } => Some("check free space and permissions on the task file"),
        _ => None,
    }
}
