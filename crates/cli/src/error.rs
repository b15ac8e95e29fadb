//! CLI exit codes for scripting and container entrypoints.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map MergeError to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Usage errors, which clap reports and exits with itself.
//!
//! Invariants:
//! - Exit code 2 is reserved for usage errors, matching clap.
//! - Unclassified errors map to GeneralError.

use env2yaml_config::MergeError;

/// Structured exit codes for env2yaml.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success, including the case where no setting matched and the file was left alone.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Usage error - wrong argument count or unknown flag.
    ///
    /// Emitted by clap; listed here so the table is complete.
    #[allow(dead_code)]
    UsageError = 2,

    /// The settings file could not be read, stat'ed, written or re-permissioned.
    IoError = 3,

    /// The settings file is not valid YAML or its top level is not a mapping.
    ParseError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&MergeError> for ExitCode {
    fn from(err: &MergeError) -> Self {
        if err.is_io() {
            ExitCode::IoError
        } else if err.is_parse() {
            ExitCode::ParseError
        } else {
            ExitCode::GeneralError
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(merge_err) = cause.downcast_ref::<MergeError>() {
                return ExitCode::from(merge_err);
            }
        }

        ExitCode::GeneralError
    }
}
