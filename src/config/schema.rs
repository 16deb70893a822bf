//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WirelogConfig {
    /// Subscriber and sink settings.
    pub logging: LoggingConfig,

    /// Pending-request table settings.
    pub correlation: CorrelationConfig,

    /// Header masking settings.
    pub redaction: RedactionConfig,
}

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset (trace, debug, info, warn, error).
    pub level: String,

    /// Text or JSON output.
    pub format: LogFormat,

    /// Application identifier attached to every record.
    pub subsystem: String,

    /// Render private fields (request bodies) in clear.
    pub reveal_private: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Full,
            subsystem: env!("CARGO_PKG_NAME").to_string(),
            reveal_private: false,
        }
    }
}

/// Pending-request table configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Age after which an unanswered request is dropped, in seconds.
    pub entry_ttl_secs: u64,

    /// How often the background sweeper runs, in seconds.
    pub sweep_interval_secs: u64,

    /// Upper bound on pending entries (backpressure).
    pub max_pending: usize,
}

impl CorrelationConfig {
    pub fn entry_ttl(&self) -> Duration {
        Duration::from_secs(self.entry_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            entry_ttl_secs: 300,
            sweep_interval_secs: 60,
            max_pending: 10_000,
        }
    }
}

/// Header masking configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RedactionConfig {
    /// Header names masked in addition to the built-in credential headers.
    pub extra_headers: Vec<String>,
}

impl WirelogConfig {
    /// Parse a config from TOML text without validating it.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
