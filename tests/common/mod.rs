//! Shared test harness: isolated store + fluent command wrapper.

// Test utility with helpers not every suite uses
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment: a temp directory holding the store file, with
/// `HOME`/`XDG_CONFIG_HOME` pointed inside it so the user's real config
/// file never leaks into a test.
pub struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp directory"),
        }
    }

    /// Path of the store file used by every command in this environment.
    pub fn store_path(&self) -> PathBuf {
        self.temp_dir.path().join("notes.json")
    }

    /// Path of an arbitrary file inside the environment.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Writes a file into the environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("failed to write file");
        path
    }

    /// A `jot` command bound to this environment's store.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new(self.temp_dir.path(), &self.store_path())
    }

    /// Adds a note via the CLI and expects success.
    pub fn add(&self, text: &str) {
        self.cmd().args(["add", text]).assert().success();
    }

    /// Adds a tagged note via the CLI and expects success.
    pub fn add_tagged(&self, text: &str, tags: &[&str]) {
        let mut cmd = self.cmd().args(["add", text]);
        for tag in tags {
            cmd = cmd.args(["--tag", tag]);
        }
        cmd.assert().success();
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent wrapper around `assert_cmd::Command` for the `jot` binary.
pub struct JotCommand {
    home: PathBuf,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl JotCommand {
    pub fn new(home: &Path, store: &Path) -> Self {
        Self {
            home: home.to_path_buf(),
            args: vec![
                "--store".to_string(),
                store.to_string_lossy().to_string(),
            ],
            envs: Vec::new(),
            stdin: None,
        }
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Sets an environment variable for the command.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Provides stdin for interactive confirmations and prompts.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("jot").expect("failed to find jot binary");
        cmd.args(&self.args);
        // Isolate from the user's real config and editor.
        cmd.env("HOME", &self.home);
        cmd.env("XDG_CONFIG_HOME", self.home.join(".config"));
        cmd.env_remove("EDITOR");
        cmd.env_remove("VISUAL");
        cmd.env_remove("JOT_PICKER");
        for (k, v) in &self.envs {
            cmd.env(k, v);
        }
        if let Some(input) = &self.stdin {
            cmd.write_stdin(input.clone());
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("output was not valid UTF-8")
    }
}
