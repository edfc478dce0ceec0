//! Task records and the in-memory task list.
//!
//! The list is kept in insertion order and serializes as a bare JSON array,
//! which is exactly what the store file holds.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const TASK_STATUSES: [&str; 3] = ["todo", "in-progress", "done"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            _ => Err(Error::InvalidArgument(format!(
                "invalid status '{}': must be {}",
                s.trim(),
                TASK_STATUSES.join(", ")
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            description: description.into(),
            status: TaskStatus::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Ordered task collection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Identifier for the next task: one past the highest id in use.
    pub fn next_id(&self) -> Result<u64> {
        let max = self.tasks.iter().map(|task| task.id).max().unwrap_or(0);
        max.checked_add(1).ok_or(Error::IdsExhausted(max))
    }

    pub fn add(&mut self, description: &str) -> Result<&Task> {
        let description = validate_description(description)?;
        let task = Task::new(self.next_id()?, description);
        self.tasks.push(task);
        let index = self.tasks.len() - 1;
        Ok(&self.tasks[index])
    }

    pub fn update_description(&mut self, id: u64, description: &str) -> Result<&Task> {
        let description = validate_description(description)?;
        let task = self.find_mut(id)?;
        task.description = description.to_string();
        task.touch();
        Ok(task)
    }

    pub fn set_status(&mut self, id: u64, status: TaskStatus) -> Result<&Task> {
        let task = self.find_mut(id)?;
        task.status = status;
        task.touch();
        Ok(task)
    }

    /// Remove the task with `id`, keeping the others in their original order.
    pub fn delete(&mut self, id: u64) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    pub fn list(&self, status: Option<TaskStatus>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| status.map_or(true, |status| task.status == status))
            .collect()
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))
    }
}

fn validate_description(description: &str) -> Result<&str> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(
            "description cannot be empty".to_string(),
        ));
    }
    Ok(trimmed)
}
