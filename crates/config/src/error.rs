//! Error types for the settings merge and the tool's runtime configuration.
//!
//! Responsibilities:
//! - Define one error variant per failing step of the merge.
//! - Define errors for invalid values of the tool's own environment variables.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see `crates/cli/src/error.rs`).
//! - Unrecognized environment variables, which are not errors.
//!
//! Invariants:
//! - Every file-related variant carries the path it failed on.
//! - Underlying errors are exposed through `source()`, not repeated in the message.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while merging environment overrides into a settings file.
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Failed to read settings file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stat settings file at {path}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Settings file at {path} must contain a YAML mapping, found {found}")]
    NotAMapping { path: PathBuf, found: &'static str },

    #[error("Failed to serialize settings for {path}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write settings file at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to restore permissions on settings file at {path}")]
    SetPermissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MergeError {
    /// Returns true for failures of the underlying filesystem.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            MergeError::Read { .. }
                | MergeError::Stat { .. }
                | MergeError::Write { .. }
                | MergeError::SetPermissions { .. }
        )
    }

    /// Returns true when the file content is not a usable settings document.
    pub fn is_parse(&self) -> bool {
        matches!(self, MergeError::Parse { .. } | MergeError::NotAMapping { .. })
    }
}

/// Errors in the environment variables that configure env2yaml itself.
#[derive(Error, Debug)]
pub enum RuntimeConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}
