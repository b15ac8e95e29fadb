//! Mapping of environment variable names onto canonical setting names.
//!
//! Responsibilities:
//! - Squash names to a case-free, delimiter-free form.
//! - Resolve any spelling of a setting (`pipeline.workers`, `PIPELINE_WORKERS`)
//!   to its canonical allow-list entry.
//!
//! Does NOT handle:
//! - Reading the process environment (see `env.rs`).
//! - Writing placeholders into the settings document (see `merge.rs`).
//!
//! Invariants:
//! - Every allow-list entry normalizes to itself.
//! - When two entries squash to the same key, the earlier entry wins.
//! - A miss is `None`, never an error: most environment variables are unrelated.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::OnceLock;

use crate::constants::VALID_SETTINGS;

/// Lower-case a setting name and strip every `.` and `_`.
pub fn squash_setting(setting: &str) -> String {
    setting
        .to_lowercase()
        .chars()
        .filter(|c| *c != '.' && *c != '_')
        .collect()
}

/// Resolves arbitrary setting spellings against a fixed allow-list.
#[derive(Debug, Clone)]
pub struct SettingsNormalizer {
    /// Squashed name -> canonical name, first allow-list occurrence only.
    index: HashMap<String, &'static str>,
}

impl SettingsNormalizer {
    /// Build a normalizer over `settings`, preserving allow-list order for ties.
    pub fn new(settings: &'static [&'static str]) -> Self {
        let mut index = HashMap::with_capacity(settings.len());
        for &setting in settings {
            match index.entry(squash_setting(setting)) {
                Entry::Vacant(slot) => {
                    slot.insert(setting);
                }
                Entry::Occupied(existing) => {
                    tracing::trace!(
                        setting,
                        shadowed_by = *existing.get(),
                        "Allow-list entry collides with an earlier entry"
                    );
                }
            }
        }
        Self { index }
    }

    /// The normalizer over the built-in allow-list, built on first use.
    pub fn builtin() -> &'static SettingsNormalizer {
        static BUILTIN: OnceLock<SettingsNormalizer> = OnceLock::new();
        BUILTIN.get_or_init(|| SettingsNormalizer::new(VALID_SETTINGS))
    }

    /// Return the canonical setting name for `name`, or `None` if it is not recognized.
    pub fn normalize(&self, name: &str) -> Option<&'static str> {
        self.index.get(&squash_setting(name)).copied()
    }
}

impl Default for SettingsNormalizer {
    fn default() -> Self {
        Self::new(VALID_SETTINGS)
    }
}

/// Normalize `name` against the built-in allow-list.
pub fn normalize_setting(name: &str) -> Option<&'static str> {
    SettingsNormalizer::builtin().normalize(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_lowercases_and_strips_delimiters() {
        assert_eq!(squash_setting("PIPELINE_UNSAFE_SHUTDOWN"), "pipelineunsafeshutdown");
        assert_eq!(squash_setting("pipeline.unsafe_shutdown"), "pipelineunsafeshutdown");
        assert_eq!(squash_setting("._._"), "");
    }

    #[test]
    fn test_canonical_name_maps_to_itself() {
        assert_eq!(normalize_setting("pipeline.workers"), Some("pipeline.workers"));
        assert_eq!(normalize_setting("allow_superuser"), Some("allow_superuser"));
    }

    #[test]
    fn test_upper_snake_case_maps_to_canonical() {
        assert_eq!(normalize_setting("PIPELINE_WORKERS"), Some("pipeline.workers"));
        assert_eq!(
            normalize_setting("PIPELINE_UNSAFE_SHUTDOWN"),
            Some("pipeline.unsafe_shutdown")
        );
        assert_eq!(
            normalize_setting("XPACK_MONITORING_ELASTICSEARCH_SSL_CA_TRUSTED_FINGERPRINT"),
            Some("xpack.monitoring.elasticsearch.ssl.ca_trusted_fingerprint")
        );
    }

    #[test]
    fn test_delimiter_placement_is_ignored() {
        assert_eq!(normalize_setting("pipe_line.WORK.ers"), Some("pipeline.workers"));
        assert_eq!(normalize_setting("pipelineworkers"), Some("pipeline.workers"));
    }

    #[test]
    fn test_unknown_names_are_not_found() {
        assert_eq!(normalize_setting("RANDOM_UNRELATED_VAR"), None);
        assert_eq!(normalize_setting("PATH"), None);
        assert_eq!(normalize_setting("HOME"), None);
        assert_eq!(normalize_setting(""), None);
        assert_eq!(normalize_setting("pipeline.workers.extra"), None);
    }

    #[test]
    fn test_first_entry_wins_on_squash_collision() {
        static COLLIDING: &[&str] = &["ab.c", "a.bc", "other"];
        let normalizer = SettingsNormalizer::new(COLLIDING);

        assert_eq!(normalizer.normalize("a.bc"), Some("ab.c"));
        assert_eq!(normalizer.normalize("AB_C"), Some("ab.c"));
        assert_eq!(normalizer.normalize("OTHER"), Some("other"));
    }

    #[test]
    fn test_builtin_list_has_no_collisions() {
        let normalizer = SettingsNormalizer::builtin();
        for setting in VALID_SETTINGS {
            assert_eq!(normalizer.normalize(setting), Some(*setting));
        }
    }

    #[test]
    fn test_tool_runtime_variables_are_not_settings() {
        assert_eq!(normalize_setting(crate::constants::LOG_FORMAT_ENV_VAR), None);
        assert_eq!(normalize_setting("RUST_LOG"), None);
    }
}
