mod support;

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

use support::{json_output, TestDir};

fn seed(dir: &TestDir) {
    dir.cmd().args(["add", "buy milk"]).assert().success();
    dir.cmd().args(["add", "write report"]).assert().success();
    dir.cmd().args(["add", "file taxes"]).assert().success();
    dir.cmd().args(["mark-in-progress", "2"]).assert().success();
    dir.cmd().args(["mark-done", "3"]).assert().success();
}

#[test]
fn empty_store_prints_placeholder() {
    let dir = TestDir::new();

    dir.cmd()
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("No tasks found"));
}

#[test]
fn list_shows_all_tasks_in_insertion_order() {
    let dir = TestDir::new();
    seed(&dir);

    let assert = dir.cmd().args(["list"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    assert!(stdout.contains("ID"));
    assert!(stdout.contains("Description"));
    let milk = stdout.find("buy milk").unwrap();
    let report = stdout.find("write report").unwrap();
    let taxes = stdout.find("file taxes").unwrap();
    assert!(milk < report && report < taxes);
}

#[test]
fn list_filters_by_status() {
    let dir = TestDir::new();
    seed(&dir);

    dir.cmd()
        .args(["list", "todo"])
        .assert()
        .success()
        .stdout(contains("buy milk").and(contains("write report").not()));

    dir.cmd()
        .args(["list", "in-progress"])
        .assert()
        .success()
        .stdout(contains("write report").and(contains("buy milk").not()));

    dir.cmd()
        .args(["list", "done"])
        .assert()
        .success()
        .stdout(contains("file taxes").and(contains("buy milk").not()));
}

#[test]
fn filtered_out_statuses_print_placeholder() {
    let dir = TestDir::new();
    dir.cmd().args(["add", "buy milk"]).assert().success();

    dir.cmd()
        .args(["list", "done"])
        .assert()
        .success()
        .stdout(contains("No tasks found"));
}

#[test]
fn unknown_filter_is_rejected_without_crashing() {
    let dir = TestDir::new();

    dir.cmd()
        .args(["list", "urgent"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid filter"));
}

#[test]
fn list_json_reports_filter_count_and_tasks() {
    let dir = TestDir::new();
    seed(&dir);

    let value = json_output(&dir, &["list", "in-progress"]);
    assert_eq!(value["command"].as_str(), Some("list"));
    assert_eq!(value["data"]["filter"].as_str(), Some("in_progress"));
    assert_eq!(value["data"]["count"].as_u64(), Some(1));
    assert_eq!(value["data"]["tasks"][0]["id"].as_u64(), Some(2));

    let value = json_output(&dir, &["list"]);
    assert_eq!(value["data"]["filter"].as_str(), Some("all"));
    assert_eq!(value["data"]["count"].as_u64(), Some(3));
}
