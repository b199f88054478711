mod support;

use predicates::str::contains;

use support::{json_output, TestDir};

#[test]
fn corrupt_store_fails_every_command_with_exit_4() {
    let dir = TestDir::new();
    dir.write_file("tasks.json", "{ not json");

    for args in [
        vec!["add", "buy milk"],
        vec!["update", "1", "x"],
        vec!["delete", "1"],
        vec!["mark-done", "1"],
        vec!["list"],
    ] {
        dir.cmd()
            .args(&args)
            .assert()
            .failure()
            .code(4)
            .stderr(contains("corrupt"));
    }
}

#[test]
fn store_with_wrong_shape_is_corrupt() {
    let dir = TestDir::new();
    dir.write_file("tasks.json", "{\"tasks\": []}");

    dir.cmd()
        .args(["list"])
        .assert()
        .failure()
        .code(4)
        .stderr(contains("corrupt"));
}

#[test]
fn corrupt_store_error_in_json_mode() {
    let dir = TestDir::new();
    dir.write_file("tasks.json", "[1, 2,");

    let output = dir
        .cmd()
        .args(["list", "--json"])
        .assert()
        .failure()
        .code(4)
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("json error envelope");
    assert_eq!(value["status"].as_str(), Some("error"));
    assert_eq!(value["error"]["code"].as_i64(), Some(4));
    assert_eq!(value["error"]["kind"].as_str(), Some("operation_failed"));
}

#[test]
fn config_file_retargets_the_store() {
    let dir = TestDir::new();
    dir.write_file(".tasks.toml", "file = \"chores.json\"");

    dir.cmd().args(["add", "buy milk"]).assert().success();

    assert!(dir.path().join("chores.json").exists());
    assert!(!dir.data_file().exists());
}

#[test]
fn invalid_config_is_a_user_error() {
    let dir = TestDir::new();
    dir.write_file(".tasks.toml", "lock_timeout_ms = 0");

    dir.cmd()
        .args(["list"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("Invalid configuration"));
}

#[test]
fn file_flag_overrides_config_and_default() {
    let dir = TestDir::new();
    dir.write_file(".tasks.toml", "file = \"chores.json\"");

    dir.cmd()
        .args(["--file", "other.json", "add", "buy milk"])
        .assert()
        .success();

    assert!(dir.path().join("other.json").exists());
    assert!(!dir.path().join("chores.json").exists());

    let value = json_output(&dir, &["--file", "other.json", "list"]);
    assert_eq!(value["data"]["count"].as_u64(), Some(1));
}

#[test]
fn existing_data_survives_reinitialization() {
    let dir = TestDir::new();
    dir.cmd().args(["add", "buy milk"]).assert().success();

    // Every invocation calls ensure_initialized; it must not clobber
    dir.cmd().args(["list"]).assert().success();
    assert_eq!(dir.read_tasks().len(), 1);
}
