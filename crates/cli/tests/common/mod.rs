//! Shared test utilities for env2yaml integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory with an empty environment.
//! - Create scratch settings files.
//!
//! Invariants / Assumptions:
//! - The host environment never leaks into the child process, so host
//!   variables such as NODE_NAME or LOG_LEVEL cannot change test outcomes.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `env2yaml` command for integration testing.
pub fn env2yaml_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("env2yaml");
    cmd.env_clear();
    cmd
}

/// Writes `content` to `logstash.yml` inside `dir` and returns its path.
pub fn settings_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("logstash.yml");
    std::fs::write(&path, content).unwrap();
    path
}

/// Parses the settings file at `path` into a mapping.
#[allow(dead_code)]
pub fn read_settings(path: &std::path::Path) -> serde_yaml::Mapping {
    serde_yaml::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
