//! Shared output formatting for task-cli commands.

use serde::Serialize;

use crate::error::{JsonError, Result};

pub const SCHEMA_VERSION: &str = "task-cli.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct HumanOutput {
    header: String,
    summary: Vec<(String, String)>,
    blocks: Vec<Vec<String>>,
}

impl HumanOutput {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            summary: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn push_summary(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.summary.push((key.into(), value.into()));
    }

    /// Add a multi-line record, rendered after the summary and separated
    /// from its neighbours by a blank line.
    pub fn push_block(&mut self, lines: Vec<String>) {
        self.blocks.push(lines);
    }
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: Option<&HumanOutput>,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    if let Some(human) = human {
        println!("{}", format_human(human));
    }

    Ok(())
}

pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: JsonError,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: JsonError::from(err),
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    Ok(())
}

pub fn format_human(output: &HumanOutput) -> String {
    let mut lines = Vec::new();
    lines.push(output.header.clone());

    if !output.summary.is_empty() {
        lines.push(String::new());
        for (key, value) in &output.summary {
            lines.push(format!("{key}: {value}"));
        }
    }

    for block in &output.blocks {
        lines.push(String::new());
        lines.extend(block.iter().cloned());
    }

    lines.join("\n")
}

/// First positional argument, used to label error output before clap runs.
pub fn infer_command_name_from_args() -> String {
    command_name(std::env::args().skip(1))
}

fn command_name(args: impl IntoIterator<Item = String>) -> String {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--file" {
            args.next();
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        return arg;
    }
    "task-cli".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_renders_single_line() {
        let human = HumanOutput::new("No tasks found");
        assert_eq!(format_human(&human), "No tasks found");
    }

    #[test]
    fn summary_follows_blank_line() {
        let mut human = HumanOutput::new("Task added");
        human.push_summary("ID", "1");
        human.push_summary("Status", "todo");
        assert_eq!(format_human(&human), "Task added\n\nID: 1\nStatus: todo");
    }

    #[test]
    fn command_name_skips_flags_and_file_value() {
        let args = ["--json", "--file", "other.json", "list", "done"].map(String::from);
        assert_eq!(command_name(args), "list");
        assert_eq!(command_name(Vec::<String>::new()), "task-cli");
    }

    #[test]
    fn blocks_are_separated() {
        let mut human = HumanOutput::new("Tasks");
        human.push_block(vec!["Task: 1".to_string(), "Status: todo".to_string()]);
        human.push_block(vec!["Task: 2".to_string()]);
        assert_eq!(
            format_human(&human),
            "Tasks\n\nTask: 1\nStatus: todo\n\nTask: 2"
        );
    }
}
