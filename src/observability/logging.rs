//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Pick text or JSON output from config
//! - Resolve the level filter from `RUST_LOG` or config
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level
//! - Initialization fails instead of silently replacing a subscriber

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::InitError;

/// Filter built from a directive string such as `info` or `wirelog=debug`.
pub fn level_filter(directive: &str) -> Result<EnvFilter, InitError> {
    EnvFilter::try_new(directive).map_err(|source| InitError::Filter {
        directive: directive.to_string(),
        source,
    })
}

/// Install the global subscriber described by `config`.
pub fn init_logging(config: &LoggingConfig) -> Result<(), InitError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.level)?,
    };
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Full => registry.with(fmt::layer()).try_init()?,
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init()?,
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
    }

    tracing::info!(
        subsystem = %config.subsystem,
        level = %config.level,
        format = ?config.format,
        "Logging initialized"
    );
    Ok(())
}
