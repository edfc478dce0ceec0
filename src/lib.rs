//! task-cli - Command-line Task Tracker Library
//!
//! Core functionality for the `task-cli` binary: a list of tasks persisted
//! as a JSON array in a local file.
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.task-cli.toml`
//! - `error`: Error types and result aliases
//! - `output`: Human and JSON output formatting
//! - `storage`: Store file loading and atomic saving
//! - `task`: Task records and list operations

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;
pub mod task;

pub use error::{Error, Result};
