//! Merge of environment overrides into a settings file.
//!
//! Responsibilities:
//! - Drive the linear Read -> Parse -> Stat -> Scan+Merge -> WriteIfChanged pass.
//! - Write `${NAME}` placeholders for every recognized environment variable.
//! - Report which settings were applied.
//!
//! Does NOT handle:
//! - Resolving placeholder values; the downstream application reads them
//!   from its own environment or keystore.
//! - Validating setting values.
//!
//! Invariants:
//! - A matched variable sets exactly one key, its canonical name.
//! - The placeholder always uses the variable name as supplied, never the canonical name.
//! - Later matches for the same canonical key overwrite earlier ones.
//! - With no matches the file is not written at all.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

use crate::constants::APPLIED_SETTING_TARGET;
use crate::document::SettingsDocument;
use crate::env::process_environment;
use crate::error::MergeError;
use crate::normalizer::SettingsNormalizer;

/// One environment variable written into the settings document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedSetting {
    /// Canonical allow-list name used as the YAML key.
    pub setting: &'static str,
    /// Environment variable name exactly as it appeared in the environment.
    pub env_var: String,
    /// Value written for the key.
    pub placeholder: String,
}

/// Outcome of a merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub path: PathBuf,
    /// Applied settings in environment order, including repeats for the same key.
    pub applied: Vec<AppliedSetting>,
}

impl MergeReport {
    /// Returns true if the settings file was rewritten.
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changed() {
            write!(
                f,
                "{} setting(s) applied to {}",
                self.applied.len(),
                self.path.display()
            )
        } else {
            write!(f, "no settings applied, {} unchanged", self.path.display())
        }
    }
}

/// Placeholder value for a setting sourced from `env_var`.
pub fn placeholder_for(env_var: &str) -> String {
    format!("${{{}}}", env_var)
}

/// Write a placeholder into `document` for every recognized name in `env`.
///
/// Values are never inspected. Names that are not valid Unicode cannot match
/// the allow-list and are skipped.
pub fn apply_environment<I, K, V>(
    document: &mut SettingsDocument,
    normalizer: &SettingsNormalizer,
    env: I,
) -> Vec<AppliedSetting>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
{
    let mut applied = Vec::new();

    for (name, _value) in env {
        let Some(name) = name.as_ref().to_str() else {
            continue;
        };
        let Some(setting) = normalizer.normalize(name) else {
            continue;
        };

        tracing::info!(
            target: APPLIED_SETTING_TARGET,
            setting,
            env_var = name,
            "Setting '{}' from environment.",
            setting
        );

        let placeholder = placeholder_for(name);
        document.set_string(setting, placeholder.clone());
        applied.push(AppliedSetting {
            setting,
            env_var: name.to_string(),
            placeholder,
        });
    }

    applied
}

/// Runs a single merge against one settings file.
#[derive(Debug, Clone)]
pub struct MergeDriver<'a> {
    path: PathBuf,
    normalizer: &'a SettingsNormalizer,
}

impl MergeDriver<'static> {
    /// Create a driver for `path` using the built-in allow-list.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            normalizer: SettingsNormalizer::builtin(),
        }
    }
}

impl<'a> MergeDriver<'a> {
    /// Use a different allow-list.
    pub fn with_normalizer<'b>(self, normalizer: &'b SettingsNormalizer) -> MergeDriver<'b> {
        MergeDriver {
            path: self.path,
            normalizer,
        }
    }

    /// Merge `env` into the settings file, rewriting it only if something matched.
    pub fn run<I, K, V>(&self, env: I) -> Result<MergeReport, MergeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
    {
        let mut document = SettingsDocument::load(&self.path)?;

        let applied = apply_environment(&mut document, self.normalizer, env);

        if applied.is_empty() {
            tracing::debug!(
                path = %self.path.display(),
                "No settings found in environment, leaving file untouched"
            );
        } else {
            document.persist()?;
        }

        Ok(MergeReport {
            path: self.path.clone(),
            applied,
        })
    }
}

/// Merge the current process environment into the settings file at `path`.
pub fn run(path: impl Into<PathBuf>) -> Result<MergeReport, MergeError> {
    run_with_env(path, process_environment())
}

/// Merge an explicit environment into the settings file at `path`.
pub fn run_with_env<I, K, V>(path: impl Into<PathBuf>, env: I) -> Result<MergeReport, MergeError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
{
    MergeDriver::new(path).run(env)
}

/// Build an explicit environment from string pairs.
pub fn env_pairs(pairs: &[(&str, &str)]) -> Vec<(OsString, OsString)> {
    pairs
        .iter()
        .map(|(name, value)| (OsString::from(name), OsString::from(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;
    use std::path::Path;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn read_setting(path: &Path, key: &str) -> Option<Value> {
        let content = std::fs::read_to_string(path).unwrap();
        let mapping: serde_yaml::Mapping = serde_yaml::from_str(&content).unwrap();
        mapping.get(key).cloned()
    }

    #[test]
    fn test_placeholder_format() {
        assert_eq!(placeholder_for("PIPELINE_WORKERS"), "${PIPELINE_WORKERS}");
        assert_eq!(placeholder_for("pipeline.workers"), "${pipeline.workers}");
    }

    #[test]
    fn test_upper_snake_override_becomes_placeholder() {
        let file = settings_file("pipeline.workers: 2\nnode.name: foo\n");

        let report = run_with_env(file.path(), env_pairs(&[("PIPELINE_WORKERS", "6")])).unwrap();

        assert!(report.changed());
        assert_eq!(
            report.applied,
            vec![AppliedSetting {
                setting: "pipeline.workers",
                env_var: "PIPELINE_WORKERS".to_string(),
                placeholder: "${PIPELINE_WORKERS}".to_string(),
            }]
        );
        assert_eq!(
            read_setting(file.path(), "pipeline.workers"),
            Some(Value::from("${PIPELINE_WORKERS}"))
        );
        assert_eq!(
            read_setting(file.path(), "node.name"),
            Some(Value::from("foo"))
        );
    }

    #[test]
    fn test_dotted_override_keeps_original_name_in_placeholder() {
        let file = settings_file("node.name: foo\n");

        run_with_env(file.path(), env_pairs(&[("Pipeline.Batch_Size", "125")])).unwrap();

        assert_eq!(
            read_setting(file.path(), "pipeline.batch.size"),
            Some(Value::from("${Pipeline.Batch_Size}"))
        );
    }

    #[test]
    fn test_no_match_leaves_file_bytes_untouched() {
        let original = "node.name: foo\n# operator comment\npipeline.workers:   2\n";
        let file = settings_file(original);

        let report = run_with_env(
            file.path(),
            env_pairs(&[("RANDOM_UNRELATED_VAR", "xyz"), ("HOME", "/root")]),
        )
        .unwrap();

        assert!(!report.changed());
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), original);
    }

    #[test]
    fn test_later_match_for_same_key_wins() {
        let file = settings_file("");

        let report = run_with_env(
            file.path(),
            env_pairs(&[("pipeline.workers", "4"), ("PIPELINE_WORKERS", "6")]),
        )
        .unwrap();

        assert_eq!(report.applied.len(), 2);
        assert_eq!(
            read_setting(file.path(), "pipeline.workers"),
            Some(Value::from("${PIPELINE_WORKERS}"))
        );
    }

    #[test]
    fn test_empty_value_still_applies() {
        let file = settings_file("log.level: info\n");

        let report = run_with_env(file.path(), env_pairs(&[("LOG_LEVEL", "")])).unwrap();

        assert!(report.changed());
        assert_eq!(
            read_setting(file.path(), "log.level"),
            Some(Value::from("${LOG_LEVEL}"))
        );
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let file = settings_file("node.name: foo\npipeline.workers: 2\n");
        let env = env_pairs(&[("PIPELINE_WORKERS", "6"), ("LOG_LEVEL", "debug")]);

        run_with_env(file.path(), env.clone()).unwrap();
        let first = std::fs::read(file.path()).unwrap();
        run_with_env(file.path(), env).unwrap();
        let second = std::fs::read(file.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_normalizer() {
        static SETTINGS: &[&str] = &["custom.key"];
        let normalizer = SettingsNormalizer::new(SETTINGS);
        let file = settings_file("a: 1\n");

        let report = MergeDriver::new(file.path())
            .with_normalizer(&normalizer)
            .run(env_pairs(&[("CUSTOM_KEY", "x"), ("PIPELINE_WORKERS", "6")]))
            .unwrap();

        assert_eq!(report.applied.len(), 1);
        assert_eq!(report.applied[0].setting, "custom.key");
        assert_eq!(read_setting(file.path(), "pipeline.workers"), None);
    }

    #[test]
    fn test_parse_failure_does_not_write() {
        let original = "key: [unclosed\n";
        let file = settings_file(original);

        let result = run_with_env(file.path(), env_pairs(&[("PIPELINE_WORKERS", "6")]));

        assert!(matches!(result, Err(MergeError::Parse { .. })));
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), original);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_names_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let file = settings_file("a: 1\n");
        let env = vec![(
            OsString::from_vec(vec![b'P', 0xff, b'W']),
            OsString::from("6"),
        )];

        let report = run_with_env(file.path(), env).unwrap();
        assert!(!report.changed());
    }

    #[test]
    fn test_report_display() {
        let report = MergeReport {
            path: PathBuf::from("logstash.yml"),
            applied: Vec::new(),
        };
        assert_eq!(report.to_string(), "no settings applied, logstash.yml unchanged");
    }
}
