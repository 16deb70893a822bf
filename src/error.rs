//! Error types shared across the crate.
//!
//! The correlation logger itself never returns errors; these cover the
//! fallible edges (config, subscriber setup, buffer splitting).

use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// A single semantic problem found in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown log level `{0}`")]
    UnknownLevel(String),

    #[error("logging.subsystem must not be empty")]
    EmptySubsystem,

    #[error("correlation.{field} must be greater than zero")]
    ZeroValue { field: &'static str },

    #[error("correlation.sweep_interval_secs ({interval}) exceeds entry_ttl_secs ({ttl})")]
    SweepSlowerThanTtl { interval: u64, ttl: u64 },

    #[error("redaction.extra_headers contains an empty header name")]
    EmptyHeaderName,
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error raised while installing the global tracing subscriber.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("invalid log filter `{directive}`: {source}")]
    Filter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("global subscriber already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// Error returned when a buffer cannot be split around a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("buffer of {len} bytes is shorter than the {header_len}-byte header")]
    TooShort { len: usize, header_len: usize },
}
