#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// Scratch working directory for driving the binary.
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

    pub fn store_path(&self) -> PathBuf {
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

    pub fn read_store(&self) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
        self.read_store_at("tasks.json")
    }

    pub fn read_store_at(&self, rel_path: &str) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(self.dir.path().join(rel_path))?;
        let tasks: Vec<Value> = serde_json::from_str(&contents)?;
        Ok(tasks)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("task-cli").expect("binary");
        cmd.current_dir(self.path())
            .env_remove("TASK_CLI_FILE")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn ids(tasks: &[Value]) -> Vec<u64> {
    tasks
        .iter()
        .filter_map(|task| task["id"].as_u64())
        .collect()
}
