//! Task command implementations.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{emit_success, format_task_line, format_tasks_human, HumanOutput, OutputOptions};
use crate::repository::{LoadReport, Recovery, Repository};
use crate::services::{filter_by_status, next_id, search, seed};
use crate::status::Status;
use crate::task::{validate_title, Task};

pub struct CreateOptions {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ListOptions {
    pub status: Option<String>,
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct SearchOptions {
    pub query: String,
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct CompleteOptions {
    pub id: u64,
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct DeleteOptions {
    pub id: u64,
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct SeedOptions {
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run_create(options: CreateOptions) -> Result<()> {
    let ctx = load_context(options.file, options.config)?;

    // Reject bad input before the store is touched.
    let title = validate_title(&options.title)?;
    let status = match options.status.as_deref() {
        Some(value) => value.parse::<Status>()?,
        None => ctx.config.default_status()?,
    };

    let report = ctx.repository.load()?;
    let task = Task::new(next_id(&report.tasks)?, title, options.description, status)?;
    ctx.repository.save_new(&task)?;

    let mut human = HumanOutput::line(format!("Created {}", format_task_line(&task)));
    push_recovery_warning(&mut human, &ctx.repository, &report);

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        &TaskOutput { task },
        &human,
    )
}

pub fn run_list(options: ListOptions) -> Result<()> {
    let ctx = load_context(options.file, options.config)?;
    let report = ctx.repository.load()?;
    let tasks = filter_by_status(report.tasks.clone(), options.status.as_deref());

    let mut human = HumanOutput::line(format_tasks_human(&tasks));
    push_recovery_warning(&mut human, &ctx.repository, &report);

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        &TaskListOutput { tasks },
        &human,
    )
}

pub fn run_search(options: SearchOptions) -> Result<()> {
    if options.query.trim().is_empty() {
        return Err(Error::validation("Search query cannot be blank"));
    }

    let ctx = load_context(options.file, options.config)?;
    let report = ctx.repository.load()?;
    let tasks = search(report.tasks.clone(), &options.query)?;

    let mut human = HumanOutput::line(format_tasks_human(&tasks));
    push_recovery_warning(&mut human, &ctx.repository, &report);

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        &TaskListOutput { tasks },
        &human,
    )
}

pub fn run_complete(options: CompleteOptions) -> Result<()> {
    let ctx = load_context(options.file, options.config)?;
    let report = ctx.repository.load()?;
    let current = report
        .tasks
        .iter()
        .find(|task| task.id() == options.id)
        .cloned()
        .ok_or(Error::TaskNotFound(options.id))?;

    let (task, changed) = if current.status() == Status::Done {
        (current, false)
    } else {
        let done = current.with_status(Status::Done);
        ctx.repository.replace(&done)?;
        (done, true)
    };

    let mut human = if changed {
        HumanOutput::line(format!("Completed {}", format_task_line(&task)))
    } else {
        HumanOutput::line(format!("Task {} is already done", task.id()))
    };
    push_recovery_warning(&mut human, &ctx.repository, &report);

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        &TaskCompletedOutput { task, changed },
        &human,
    )
}

pub fn run_delete(options: DeleteOptions) -> Result<()> {
    let ctx = load_context(options.file, options.config)?;
    let report = ctx.repository.load()?;
    let task = ctx.repository.remove(options.id)?;

    let mut human = HumanOutput::line(format!("Deleted {}", format_task_line(&task)));
    push_recovery_warning(&mut human, &ctx.repository, &report);

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        &TaskOutput { task },
        &human,
    )
}

pub fn run_seed(options: SeedOptions) -> Result<()> {
    let ctx = load_context(options.file, options.config)?;
    let report = ctx.repository.load()?;
    let tasks = seed(&ctx.repository)?;

    let mut human = HumanOutput::line(format!("Seeded {} sample task(s)", tasks.len()));
    for task in &tasks {
        human.push_line(format_task_line(task));
    }
    push_recovery_warning(&mut human, &ctx.repository, &report);

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        &SeedOutput {
            added: tasks.len(),
            tasks,
        },
        &human,
    )
}

#[derive(serde::Serialize)]
struct TaskOutput {
    task: Task,
}

#[derive(serde::Serialize)]
struct TaskListOutput {
    tasks: Vec<Task>,
}

#[derive(serde::Serialize)]
struct TaskCompletedOutput {
    task: Task,
    changed: bool,
}

#[derive(serde::Serialize)]
struct SeedOutput {
    added: usize,
    tasks: Vec<Task>,
}

struct TaskContext {
    repository: Repository,
    config: Config,
}

fn load_context(file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<TaskContext> {
    let cwd = std::env::current_dir()?;
    let config = match config_path {
        Some(path) => Config::load(&path)?,
        None => Config::load_from_dir(&cwd)?,
    };
    let path = config.data_path(file.as_deref(), &cwd);
    tracing::debug!(path = %path.display(), "using task file");
    let repository = Repository::new(path).with_pretty(config.storage.pretty);

    Ok(TaskContext { repository, config })
}

fn push_recovery_warning(human: &mut HumanOutput, repository: &Repository, report: &LoadReport) {
    let Some(Recovery { backup }) = report.recovery.as_ref() else {
        return;
    };
    let message = match backup {
        Some(backup) => format!(
            "{} was corrupt and has been reset; backed up to {}",
            repository.path().display(),
            backup.display()
        ),
        None => format!(
            "{} was corrupt and has been reset; the backup could not be written",
            repository.path().display()
        ),
    };
    human.push_warning(message);
}
