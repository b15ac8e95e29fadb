//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not touch the settings file (see `env2yaml_config::merge`).
//! - Does not read the tool's logging variables (see `env2yaml_config::logging`).

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "env2yaml")]
#[command(
    about = "Merge recognized environment variables into a YAML settings file as ${VAR} placeholders",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  PIPELINE_WORKERS=6 env2yaml /usr/share/logstash/config/logstash.yml\n  RUST_LOG=debug env2yaml logstash.yml\n  ENV2YAML_LOG_FORMAT=json env2yaml logstash.yml\n"
)]
pub struct Cli {
    /// Path to the YAML settings file to update in place
    #[arg(value_name = "FILENAME", allow_hyphen_values = true)]
    pub settings_file: PathBuf,
}
