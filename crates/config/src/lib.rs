//! Environment-to-YAML settings reconciliation.
//!
//! This crate merges recognized environment variables into a YAML settings
//! file as `${NAME}` placeholders, leaving resolution of the actual values to
//! the application that reads the file.

pub mod constants;
pub mod document;
pub mod emit;
pub mod env;
pub mod error;
pub mod logging;
pub mod merge;
pub mod normalizer;

pub use document::SettingsDocument;
pub use env::{env_var_or_none, process_environment};
pub use error::{MergeError, RuntimeConfigError};
pub use logging::{LogFormat, LoggingConfig};
pub use merge::{
    AppliedSetting, MergeDriver, MergeReport, apply_environment, env_pairs, placeholder_for, run,
    run_with_env,
};
pub use normalizer::{SettingsNormalizer, normalize_setting, squash_setting};
