use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness running the `planner` binary inside an isolated directory
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    /// Create a new harness with an empty working directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("planner").expect("Failed to find planner binary");
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        for key in ["PLANNER_NOW", "PLANNER_PREVIEW_COUNT", "PLANNER_LOG_LEVEL"] {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Write a config file into the working directory and return its path
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate matching exactly one date line
    pub fn prints_date(date: &str) -> impl Predicate<str> {
        predicate::str::diff(format!("{date}\n"))
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error")
    }
}
