//! Environment variable access.
//!
//! Responsibilities:
//! - Snapshot the process environment as name/value pairs for the merge.
//! - Read the tool's own configuration variables with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Matching names against the allow-list (see `normalizer.rs`).
//!
//! Invariants:
//! - The environment is read as `OsString` pairs so non-Unicode entries never panic.
//! - Empty or whitespace-only tool variables are treated as unset.
//! - Returned tool variable values are trimmed.

use std::ffi::OsString;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Snapshot every `NAME=value` entry of the current process environment.
///
/// Order is whatever the platform yields.
pub fn process_environment() -> Vec<(OsString, OsString)> {
    std::env::vars_os().collect()
}
