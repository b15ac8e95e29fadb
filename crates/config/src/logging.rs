//! Logging configuration for the env2yaml process itself.
//!
//! Responsibilities:
//! - Parse `ENV2YAML_LOG_FORMAT` into a [`LogFormat`].
//! - Provide the default filter used when `RUST_LOG` is unset.
//!
//! Does NOT handle:
//! - Installing the tracing subscriber (see `crates/cli/src/main.rs`).
//!
//! Invariants:
//! - An unset or blank format variable means [`LogFormat::Text`].
//! - An unrecognized format also means [`LogFormat::Text`]; the rejected value
//!   is kept so the caller can warn about it. It never stops a merge.
//! - Format names are matched case-insensitively.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_LOG_FILTER, LOG_FORMAT_ENV_VAR};
use crate::env::env_var_or_none;
use crate::error::RuntimeConfigError;

/// Output format for log lines on standard error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = RuntimeConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(RuntimeConfigError::InvalidValue {
                var: LOG_FORMAT_ENV_VAR.to_string(),
                message: format!("must be text or json (got '{}')", s),
            }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// How the process should log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Directive used when `RUST_LOG` is unset or unparsable.
    pub default_filter: String,
    /// Unrecognized `ENV2YAML_LOG_FORMAT` value that was replaced by the default.
    pub rejected_format: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_filter: DEFAULT_LOG_FILTER.to_string(),
            rejected_format: None,
        }
    }
}

impl LoggingConfig {
    /// Read the logging configuration from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(format) = env_var_or_none(LOG_FORMAT_ENV_VAR) {
            match format.parse() {
                Ok(format) => config.format = format,
                Err(RuntimeConfigError::InvalidValue { .. }) => {
                    config.rejected_format = Some(format);
                }
            }
        }
        config
    }
}
