//! Centralized constants for the env2yaml workspace.
//!
//! This module holds the built-in settings allow-list and the names of the
//! environment variables that configure the tool itself.

// =============================================================================
// Settings Allow-List
// =============================================================================

/// Canonical names of every setting that may be overridden from the environment.
///
/// Order matters: when two entries squash to the same key, the earlier one wins.
pub const VALID_SETTINGS: &[&str] = &[
    "api.enabled",
    "api.http.host",
    "api.http.port",
    "api.environment",
    "node.name",
    "path.data",
    "pipeline.id",
    "pipeline.workers",
    "pipeline.output.workers",
    "pipeline.batch.size",
    "pipeline.batch.delay",
    "pipeline.unsafe_shutdown",
    "pipeline.ecs_compatibility",
    "pipeline.ordered",
    "pipeline.plugin_classloaders",
    "pipeline.separate_logs",
    "path.config",
    "config.string",
    "config.test_and_exit",
    "config.reload.automatic",
    "config.reload.interval",
    "config.debug",
    "config.support_escapes",
    "config.field_reference.escape_style",
    "queue.type",
    "path.queue",
    "queue.page_capacity",
    "queue.max_events",
    "queue.max_bytes",
    "queue.checkpoint.acks",
    "queue.checkpoint.writes",
    "queue.checkpoint.interval",
    "queue.drain",
    "dead_letter_queue.enable",
    "dead_letter_queue.max_bytes",
    "dead_letter_queue.flush_interval",
    "dead_letter_queue.storage_policy",
    "dead_letter_queue.retain.age",
    "path.dead_letter_queue",
    "log.level",
    "log.format",
    "log.format.json.fix_duplicate_message_fields",
    "metric.collect",
    "path.logs",
    "path.plugins",
    "api.auth.type",
    "api.auth.basic.username",
    "api.auth.basic.password",
    "api.auth.basic.password_policy.mode",
    "api.auth.basic.password_policy.length.minimum",
    "api.auth.basic.password_policy.include.upper",
    "api.auth.basic.password_policy.include.lower",
    "api.auth.basic.password_policy.include.digit",
    "api.auth.basic.password_policy.include.symbol",
    "allow_superuser",
    "monitoring.cluster_uuid",
    "xpack.monitoring.allow_legacy_collection",
    "xpack.monitoring.enabled",
    "xpack.monitoring.collection.interval",
    "xpack.monitoring.elasticsearch.hosts",
    "xpack.monitoring.elasticsearch.username",
    "xpack.monitoring.elasticsearch.password",
    "xpack.monitoring.elasticsearch.proxy",
    "xpack.monitoring.elasticsearch.api_key",
    "xpack.monitoring.elasticsearch.cloud_auth",
    "xpack.monitoring.elasticsearch.cloud_id",
    "xpack.monitoring.elasticsearch.sniffing",
    "xpack.monitoring.elasticsearch.ssl.certificate_authority",
    "xpack.monitoring.elasticsearch.ssl.ca_trusted_fingerprint",
    "xpack.monitoring.elasticsearch.ssl.verification_mode",
    "xpack.monitoring.elasticsearch.ssl.truststore.path",
    "xpack.monitoring.elasticsearch.ssl.truststore.password",
    "xpack.monitoring.elasticsearch.ssl.keystore.path",
    "xpack.monitoring.elasticsearch.ssl.keystore.password",
    "xpack.monitoring.elasticsearch.ssl.certificate",
    "xpack.monitoring.elasticsearch.ssl.key",
    "xpack.monitoring.elasticsearch.ssl.cipher_suites",
    "xpack.management.enabled",
    "xpack.management.logstash.poll_interval",
    "xpack.management.pipeline.id",
    "xpack.management.elasticsearch.hosts",
    "xpack.management.elasticsearch.username",
    "xpack.management.elasticsearch.password",
    "xpack.management.elasticsearch.proxy",
    "xpack.management.elasticsearch.api_key",
    "xpack.management.elasticsearch.cloud_auth",
    "xpack.management.elasticsearch.cloud_id",
    "xpack.management.elasticsearch.sniffing",
    "xpack.management.elasticsearch.ssl.certificate_authority",
    "xpack.management.elasticsearch.ssl.ca_trusted_fingerprint",
    "xpack.management.elasticsearch.ssl.verification_mode",
    "xpack.management.elasticsearch.ssl.truststore.path",
    "xpack.management.elasticsearch.ssl.truststore.password",
    "xpack.management.elasticsearch.ssl.keystore.path",
    "xpack.management.elasticsearch.ssl.keystore.password",
    "xpack.management.elasticsearch.ssl.certificate",
    "xpack.management.elasticsearch.ssl.key",
    "xpack.management.elasticsearch.ssl.cipher_suites",
    "xpack.geoip.download.endpoint",
    "xpack.geoip.downloader.enabled",
];

// =============================================================================
// Tool Runtime Configuration
// =============================================================================

/// Selects the log output format (`text` or `json`). Unknown values fall back to text.
pub const LOG_FORMAT_ENV_VAR: &str = "ENV2YAML_LOG_FORMAT";

/// Filter directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Tracing target of the per-setting "applied" lines, kept enabled at INFO
/// whatever `RUST_LOG` says.
pub const APPLIED_SETTING_TARGET: &str = "env2yaml::applied";
