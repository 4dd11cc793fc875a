//! # Logging Setup
//!
//! Structured logging configuration built on `tracing`.
//!
//! The configured level acts as the default; `RUST_LOG` overrides it when
//! set, so operators can turn on per-module trace output without touching
//! configuration files.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Install a global tracing subscriber from the logging configuration.
///
/// Calling this more than once is harmless: later calls leave the
/// existing subscriber in place.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
