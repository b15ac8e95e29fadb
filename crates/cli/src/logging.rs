//! Tracing subscriber setup.
//!
//! Responsibilities:
//! - Install a stderr-only `fmt` subscriber in text or JSON form.
//! - Honor `RUST_LOG`, falling back to the configured default filter.
//!
//! Invariants:
//! - Applied-setting lines are printed at INFO whatever `RUST_LOG` says.
//! - Nothing is ever logged to stdout.
//! - ANSI colors are used only when stderr is a terminal.

use std::io::IsTerminal;

use env2yaml_config::constants::APPLIED_SETTING_TARGET;
use env2yaml_config::{LogFormat, LoggingConfig};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build the event filter: `RUST_LOG` or the default, plus the applied-setting target.
fn build_filter(config: &LoggingConfig) -> EnvFilter {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    match format!("{APPLIED_SETTING_TARGET}=info").parse::<Directive>() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter,
    }
}

/// Install the global tracing subscriber.
pub fn init(config: &LoggingConfig) {
    let env_filter = build_filter(config);

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(std::io::stderr().is_terminal()),
                )
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
    }
}
