//! env2yaml - merge environment overrides into a YAML settings file.
//!
//! Responsibilities:
//! - Parse the single FILENAME argument.
//! - Initialize logging from the tool's own environment variables.
//! - Run the merge and translate failures into structured exit codes.
//!
//! Does NOT handle:
//! - Matching, merging or writing settings (see `crates/config`).
//!
//! Invariants:
//! - Usage errors exit before any file I/O.
//! - The tool's own logging variables never stop a merge.
//! - Every fatal error prints one diagnostic line with its cause chain on stderr.

mod args;
mod error;
mod logging;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use env2yaml_config::constants::LOG_FORMAT_ENV_VAR;
use env2yaml_config::{LoggingConfig, MergeReport};
use error::{ExitCode, ExitCodeExt};

fn run(cli: &Cli) -> anyhow::Result<MergeReport> {
    env2yaml_config::run(&cli.settings_file).with_context(|| {
        format!(
            "error merging environment into {}",
            cli.settings_file.display()
        )
    })
}

fn main() {
    let cli = Cli::parse();

    let logging_config = LoggingConfig::from_env();
    logging::init(&logging_config);

    if let Some(rejected) = &logging_config.rejected_format {
        tracing::warn!(
            value = %rejected,
            "Unrecognized {} value, logging as text",
            LOG_FORMAT_ENV_VAR
        );
    }

    let exit_code = match run(&cli) {
        Ok(report) => {
            tracing::debug!(
                applied = report.applied.len(),
                changed = report.changed(),
                "{}",
                report
            );
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
