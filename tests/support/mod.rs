use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// A scratch working directory for driving the tasks binary.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A tasks command running in this directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = tasks_cmd();
        cmd.current_dir(self.path());
        cmd
    }

    pub fn data_file(&self) -> PathBuf {
        self.path().join("tasks.json")
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel_path);
        fs::write(&path, contents).expect("write file");
        path
    }

    /// Parse the persisted task array.
    pub fn read_tasks(&self) -> Vec<Value> {
        let contents = fs::read_to_string(self.data_file()).expect("read tasks.json");
        serde_json::from_str(&contents).expect("tasks.json is a JSON array")
    }
}

pub fn tasks_cmd() -> Command {
    Command::cargo_bin("tasks").expect("tasks binary")
}

/// Run a successful command with `--json` and parse the output envelope.
pub fn json_output(dir: &TestDir, args: &[&str]) -> Value {
    let output = dir
        .cmd()
        .args(args)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("json envelope")
}
