mod support;

use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;

use support::{ids, TestDir};

fn add_tasks(dir: &TestDir, descriptions: &[&str]) {
    for description in descriptions {
        dir.cmd().args(["add", description]).assert().success();
    }
}

#[test]
fn add_assigns_sequential_ids() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    add_tasks(&dir, &["one", "two", "three", "four"]);

    let tasks = dir.read_store()?;
    assert_eq!(ids(&tasks), vec![1, 2, 3, 4]);
    for task in &tasks {
        assert_eq!(task["status"], "todo");
        assert_eq!(task["createdAt"], task["updatedAt"]);
    }

    Ok(())
}

#[test]
fn add_reports_new_id() {
    let dir = TestDir::new();
    dir.cmd()
        .args(["add", "Buy groceries"])
        .assert()
        .success()
        .stdout(contains("Task added successfully (ID: 1)"));
}

#[test]
fn add_joins_multiple_words() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.cmd()
        .args(["add", "Buy", "groceries", "today"])
        .assert()
        .success();

    let tasks = dir.read_store()?;
    assert_eq!(tasks[0]["description"], "Buy groceries today");
    Ok(())
}

#[test]
fn add_rejects_blank_description() {
    let dir = TestDir::new();
    dir.cmd()
        .args(["add", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("description cannot be empty"));
}

#[test]
fn delete_preserves_order_of_rest() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    add_tasks(&dir, &["a", "b", "c", "d"]);

    dir.cmd()
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(contains("Task 2 deleted"));

    let tasks = dir.read_store()?;
    assert_eq!(ids(&tasks), vec![1, 3, 4]);

    add_tasks(&dir, &["e"]);
    assert_eq!(ids(&dir.read_store()?), vec![1, 3, 4, 5]);
    Ok(())
}

#[test]
fn update_changes_description() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    add_tasks(&dir, &["draft"]);

    dir.cmd()
        .args(["update", "1", "final", "version"])
        .assert()
        .success();

    let tasks = dir.read_store()?;
    assert_eq!(tasks[0]["description"], "final version");
    assert_eq!(tasks[0]["status"], "todo");
    Ok(())
}

#[test]
fn update_missing_task_leaves_store_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    add_tasks(&dir, &["a", "b"]);
    let before = std::fs::read_to_string(dir.store_path())?;

    dir.cmd()
        .args(["update", "42", "nope"])
        .assert()
        .failure()
        .stderr(contains("task not found"));

    let after = std::fs::read_to_string(dir.store_path())?;
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn status_commands_change_status() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    add_tasks(&dir, &["a", "b", "c"]);

    dir.cmd()
        .args(["mark-in-progress", "1"])
        .assert()
        .success()
        .stdout(contains("Task 1 marked as in-progress"));
    dir.cmd().args(["mark-done", "2"]).assert().success();
    dir.cmd().args(["mark-done", "3"]).assert().success();
    dir.cmd().args(["mark-todo", "3"]).assert().success();

    let tasks = dir.read_store()?;
    let statuses: Vec<&str> = tasks
        .iter()
        .filter_map(|task| task["status"].as_str())
        .collect();
    assert_eq!(statuses, vec!["in-progress", "done", "todo"]);
    Ok(())
}

#[test]
fn mark_missing_task_fails() {
    let dir = TestDir::new();
    dir.cmd()
        .args(["mark-done", "7"])
        .assert()
        .failure()
        .stderr(contains("task not found: 7"));
}

#[test]
fn list_filters_by_status_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    add_tasks(&dir, &["a", "b", "c", "d"]);
    dir.cmd().args(["mark-done", "3"]).assert().success();
    dir.cmd().args(["mark-done", "1"]).assert().success();
    dir.cmd().args(["mark-in-progress", "2"]).assert().success();

    let output = dir
        .cmd()
        .args(["list", "done", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let payload: Value = serde_json::from_slice(&output)?;
    assert_eq!(payload["command"], "list");
    assert_eq!(payload["data"]["total"], 2);
    let tasks = payload["data"]["tasks"].as_array().cloned().unwrap_or_default();
    assert_eq!(ids(&tasks), vec![1, 3]);

    dir.cmd()
        .args(["list", "in-progress"])
        .assert()
        .success()
        .stdout(contains("Task: 2"))
        .stdout(contains("Status: in-progress"))
        .stdout(contains("Description: b"))
        .stdout(contains("Task: 1").not());

    Ok(())
}

#[test]
fn list_all_shows_every_task() {
    let dir = TestDir::new();
    add_tasks(&dir, &["first", "second"]);

    dir.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Tasks (2)"))
        .stdout(contains("Description: first"))
        .stdout(contains("Description: second"))
        .stdout(contains("Created at:"))
        .stdout(contains("Updated at:"));
}

#[test]
fn list_empty_store() {
    let dir = TestDir::new();
    dir.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("No tasks found\n");
}

#[test]
fn list_with_unknown_status_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    add_tasks(&dir, &["a"]);
    let before = std::fs::read_to_string(dir.store_path())?;

    dir.cmd()
        .args(["list", "blocked"])
        .assert()
        .success()
        .stdout("command not found\n")
        .stderr("");

    dir.cmd()
        .args(["--json", "list", "blocked"])
        .assert()
        .success()
        .stdout(contains("\"message\": \"command not found\""))
        .stdout(contains("\"command\": \"list\""));

    assert_eq!(std::fs::read_to_string(dir.store_path())?, before);
    Ok(())
}

#[test]
fn quiet_suppresses_output() {
    let dir = TestDir::new();
    dir.cmd()
        .args(["add", "silent", "--quiet"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn json_add_returns_task() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    let output = dir
        .cmd()
        .args(["--json", "add", "structured"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: Value = serde_json::from_slice(&output)?;
    assert_eq!(payload["schema_version"], "task-cli.v1");
    assert_eq!(payload["status"], "success");
    assert_eq!(payload["data"]["id"], 1);
    assert_eq!(payload["data"]["description"], "structured");
    Ok(())
}

#[test]
fn json_error_envelope() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    let output = dir
        .cmd()
        .args(["--json", "delete", "3"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let payload: Value = serde_json::from_slice(&output)?;
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["command"], "delete");
    assert_eq!(payload["error"]["kind"], "user_error");
    assert_eq!(payload["error"]["message"], "task not found: 3");
    Ok(())
}
