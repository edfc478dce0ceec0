//! task-cli - track tasks from the command line
//!
//! Loads `tasks.json` from the working directory, applies one command, and
//! writes the file back when the command changed it.

use clap::Parser;
use task_cli::cli::Cli;
use task_cli::output::{emit_error, infer_command_name_from_args};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Longest `RUST_LOG` value accepted as a filter directive.
const MAX_FILTER_LEN: usize = 4096;

fn log_filter() -> EnvFilter {
    let Ok(raw) = std::env::var("RUST_LOG") else {
        return EnvFilter::new("off");
    };
    let raw = raw.trim();
    if raw.is_empty() || raw.len() > MAX_FILTER_LEN {
        return EnvFilter::new("off");
    }
    // A malformed directive silences logging instead of aborting the command.
    EnvFilter::try_new(raw).unwrap_or_else(|_| EnvFilter::new("off"))
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter())
        .init();
}

fn main() {
    init_tracing();

    let command = infer_command_name_from_args();
    let cli = Cli::parse();
    let json = cli.json;
    if let Err(err) = cli.run() {
        let _ = emit_error(&command, &err, json);
        std::process::exit(err.exit_code());
    }
}
