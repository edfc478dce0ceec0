//! task-cli command implementations.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::Storage;
use crate::task::{Task, TaskList, TaskStatus};

pub struct AddOptions {
    pub description: String,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct UpdateOptions {
    pub id: u64,
    pub description: String,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct DeleteOptions {
    pub id: u64,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ListOptions {
    pub status: Option<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct StatusOptions {
    pub id: u64,
    pub status: TaskStatus,
    pub command: &'static str,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct UnknownOptions {
    pub command: String,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct TaskDeletedOutput {
    id: u64,
    remaining: usize,
}

#[derive(Serialize)]
struct TaskListOutput<'a> {
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<TaskStatus>,
    tasks: Vec<&'a Task>,
}

#[derive(Serialize)]
struct UnknownCommandOutput {
    command: String,
    message: &'static str,
}

struct TaskContext {
    config: Config,
    storage: Storage,
    tasks: TaskList,
}

impl TaskContext {
    fn save(&self) -> Result<()> {
        self.storage.save(&self.tasks)
    }
}

pub fn run_add(options: AddOptions) -> Result<()> {
    let mut ctx = load_context(options.file)?;
    let task = ctx.tasks.add(&options.description)?.clone();
    ctx.save()?;

    let mut human = HumanOutput::new(format!("Task added successfully (ID: {})", task.id));
    human.push_summary("Status", task.status.to_string());
    human.push_summary("Description", task.description.clone());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &task,
        Some(&human),
    )
}

pub fn run_update(options: UpdateOptions) -> Result<()> {
    let mut ctx = load_context(options.file)?;
    let task = ctx
        .tasks
        .update_description(options.id, &options.description)?
        .clone();
    ctx.save()?;

    let mut human = HumanOutput::new(format!("Task {} updated", task.id));
    human.push_summary("Description", task.description.clone());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "update",
        &task,
        Some(&human),
    )
}

pub fn run_delete(options: DeleteOptions) -> Result<()> {
    let mut ctx = load_context(options.file)?;
    let removed = ctx.tasks.delete(options.id)?;
    ctx.save()?;

    let output = TaskDeletedOutput {
        id: removed.id,
        remaining: ctx.tasks.len(),
    };

    let mut human = HumanOutput::new(format!("Task {} deleted", removed.id));
    human.push_summary("Remaining", ctx.tasks.len().to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "delete",
        &output,
        Some(&human),
    )
}

pub fn run_status(options: StatusOptions) -> Result<()> {
    let mut ctx = load_context(options.file)?;
    let task = ctx.tasks.set_status(options.id, options.status)?.clone();
    ctx.save()?;

    let mut human = HumanOutput::new(format!("Task {} marked as {}", task.id, task.status));
    human.push_summary("Description", task.description.clone());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        options.command,
        &task,
        Some(&human),
    )
}

pub fn run_list(options: ListOptions) -> Result<()> {
    let status = match options
        .status
        .as_deref()
        .map(str::parse::<TaskStatus>)
        .transpose()
    {
        Ok(status) => status,
        Err(err) => {
            debug!(error = %err, "unrecognized list filter");
            return run_unknown(UnknownOptions {
                command: "list".to_string(),
                json: options.json,
                quiet: options.quiet,
            });
        }
    };
    let ctx = load_context(options.file)?;
    let tasks = ctx.tasks.list(status);
    debug!(total = ctx.tasks.len(), matched = tasks.len(), "listing tasks");

    let time_format = ctx.config.display.time_format.as_str();
    let mut human = if tasks.is_empty() {
        HumanOutput::new("No tasks found")
    } else {
        HumanOutput::new(format!("Tasks ({})", tasks.len()))
    };
    for task in &tasks {
        human.push_block(vec![
            format!("Task: {}", task.id),
            format!("Status: {}", task.status),
            format!("Description: {}", task.description),
            format!("Created at: {}", task.created_at.format(time_format)),
            format!("Updated at: {}", task.updated_at.format(time_format)),
        ]);
    }

    let output = TaskListOutput {
        total: tasks.len(),
        status,
        tasks,
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &output,
        Some(&human),
    )
}

pub fn run_unknown(options: UnknownOptions) -> Result<()> {
    debug!(command = %options.command, "unknown command");
    let output = UnknownCommandOutput {
        command: options.command,
        message: "command not found",
    };
    let human = HumanOutput::new("command not found");

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        &output.command,
        &output,
        Some(&human),
    )
}

fn load_context(file: Option<PathBuf>) -> Result<TaskContext> {
    let workdir = std::env::current_dir()?;
    let config = Config::load_from_dir(&workdir)?;
    let path = match file {
        Some(path) => workdir.join(path),
        None => config.store_path(&workdir),
    };
    let storage = Storage::open(path)?.with_pretty(config.store.pretty);
    let tasks = storage.load()?;

    Ok(TaskContext {
        config,
        storage,
        tasks,
    })
}
