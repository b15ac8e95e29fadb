//! The YAML settings document being reconciled.
//!
//! Responsibilities:
//! - Read and parse the settings file into an ordered YAML mapping.
//! - Capture the file's permissions so a rewrite keeps them.
//! - Serialize the mapping and overwrite the file in place.
//!
//! Does NOT handle:
//! - Deciding which keys to set (see `merge.rs`).
//! - Temp-file-and-rename writes; the overwrite is a plain truncate and write.
//!
//! Invariants:
//! - Keys not touched by the merge keep their values and their position.
//! - Strings keep their meaning for YAML 1.1 readers (see `emit.rs`).
//! - An empty or null document is an empty mapping; any other non-mapping is rejected.
//! - Duplicate top-level keys are a parse error.
//! - `persist` always reapplies the permissions captured by `load`.

use std::fs::Permissions;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::emit;
use crate::error::MergeError;

/// A settings file loaded into memory.
#[derive(Debug, Clone)]
pub struct SettingsDocument {
    path: PathBuf,
    settings: Mapping,
    permissions: Permissions,
}

impl SettingsDocument {
    /// Read, parse and stat the settings file at `path`, in that order.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MergeError> {
        let path = path.as_ref().to_path_buf();

        let content = std::fs::read(&path).map_err(|e| MergeError::Read {
            path: path.clone(),
            source: e,
        })?;

        let settings = parse_settings(&path, &content)?;

        let permissions = std::fs::metadata(&path)
            .map_err(|e| MergeError::Stat {
                path: path.clone(),
                source: e,
            })?
            .permissions();

        Ok(Self {
            path,
            settings,
            permissions,
        })
    }

    /// Permissions captured when the document was loaded.
    pub fn permissions(&self) -> &Permissions {
        &self.permissions
    }

    /// The settings mapping, in file order.
    pub fn settings(&self) -> &Mapping {
        &self.settings
    }

    /// Look up a top-level setting by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// Number of top-level settings.
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Returns true if the document has no settings.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Set a top-level string setting, returning the value it replaced.
    ///
    /// An existing key keeps its position in the mapping; a new key is appended.
    pub fn set_string(&mut self, key: &str, value: String) -> Option<Value> {
        self.settings
            .insert(Value::String(key.to_string()), Value::String(value))
    }

    /// Serialize the whole document to YAML text readable by YAML 1.1 parsers.
    pub fn to_yaml(&self) -> Result<String, MergeError> {
        emit::to_yaml_string(&self.settings).map_err(|e| MergeError::Serialize {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Overwrite the settings file with the current document.
    pub fn persist(&self) -> Result<(), MergeError> {
        let output = self.to_yaml()?;

        std::fs::write(&self.path, output).map_err(|e| MergeError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        std::fs::set_permissions(&self.path, self.permissions.clone()).map_err(|e| {
            MergeError::SetPermissions {
                path: self.path.clone(),
                source: e,
            }
        })?;

        tracing::debug!(path = %self.path.display(), "Settings file rewritten");
        Ok(())
    }
}

/// Parse raw file content into a top-level mapping.
fn parse_settings(path: &Path, content: &[u8]) -> Result<Mapping, MergeError> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(Mapping::new());
    }

    let value: Value = serde_yaml::from_slice(content).map_err(|e| MergeError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Mapping(settings) => Ok(settings),
        Value::Null => Ok(Mapping::new()),
        other => Err(MergeError::NotAMapping {
            path: path.to_path_buf(),
            found: describe(&other),
        }),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
