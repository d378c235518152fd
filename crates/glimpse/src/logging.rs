//! Logging initialization.
//!
//! Uses the `tracing` ecosystem. Log output goes to stderr — stdout is
//! reserved for captions and analysis output. The RUST_LOG environment
//! variable overrides the configured level.

use glimpse_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem from config, with CLI overrides.
///
/// `verbose` forces DEBUG level; `json_logs` forces JSON output. Without
/// overrides, the `[logging]` config section decides both.
pub fn init_from_config(config: &Config, verbose: bool, json_logs: bool) {
    let configured = match config.logging.level.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" => config.logging.level.as_str(),
        _ => "info",
    };
    let level = if verbose { "debug" } else { configured };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json_logs || config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}
