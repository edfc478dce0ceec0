//! Command-line interface for task-cli
//!
//! This module defines the CLI structure using clap derive macros.
//! Command implementations live in the `task` submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::error::Result;
use crate::task::TaskStatus;

mod task;

/// task-cli - track tasks in a local JSON file
#[derive(Parser, Debug)]
#[command(name = "task-cli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file (defaults to tasks.json in the current directory)
    #[arg(long, global = true, env = "TASK_CLI_FILE")]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task description (multiple words are joined with spaces)
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// Change a task's description
    Update {
        /// Task ID
        id: u64,

        /// New description
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },

    /// List tasks, optionally filtered by status
    List {
        /// Status filter: todo, in-progress, done
        status: Option<String>,
    },

    /// Mark a task as in progress
    MarkInProgress {
        /// Task ID
        id: u64,
    },

    /// Mark a task as done
    MarkDone {
        /// Task ID
        id: u64,
    },

    /// Move a task back to todo
    MarkTodo {
        /// Task ID
        id: u64,
    },

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        debug!(command = ?self.command, "dispatching");
        match self.command {
            Commands::Add { description } => task::run_add(task::AddOptions {
                description: description.join(" "),
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Update { id, description } => task::run_update(task::UpdateOptions {
                id,
                description: description.join(" "),
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Delete { id } => task::run_delete(task::DeleteOptions {
                id,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List { status } => task::run_list(task::ListOptions {
                status,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::MarkInProgress { id } => task::run_status(task::StatusOptions {
                id,
                status: TaskStatus::InProgress,
                command: "mark-in-progress",
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::MarkDone { id } => task::run_status(task::StatusOptions {
                id,
                status: TaskStatus::Done,
                command: "mark-done",
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::MarkTodo { id } => task::run_status(task::StatusOptions {
                id,
                status: TaskStatus::Todo,
                command: "mark-todo",
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Unknown(args) => task::run_unknown(task::UnknownOptions {
                command: args.into_iter().next().unwrap_or_default(),
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
