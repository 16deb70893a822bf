//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (intervals > 0, known log levels)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: WirelogConfig → Result<(), Vec<ValidationError>>

use crate::config::schema::WirelogConfig;
use crate::error::ValidationError;

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Check a parsed configuration for semantic problems.
pub fn validate_config(config: &WirelogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.logging.level.to_ascii_lowercase();
    if !LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLevel(config.logging.level.clone()));
    }
    if config.logging.subsystem.trim().is_empty() {
        errors.push(ValidationError::EmptySubsystem);
    }

    let correlation = &config.correlation;
    if correlation.entry_ttl_secs == 0 {
        errors.push(ValidationError::ZeroValue { field: "entry_ttl_secs" });
    }
    if correlation.sweep_interval_secs == 0 {
        errors.push(ValidationError::ZeroValue { field: "sweep_interval_secs" });
    }
    if correlation.max_pending == 0 {
        errors.push(ValidationError::ZeroValue { field: "max_pending" });
    }
    if correlation.entry_ttl_secs > 0
        && correlation.sweep_interval_secs > correlation.entry_ttl_secs
    {
        errors.push(ValidationError::SweepSlowerThanTtl {
            interval: correlation.sweep_interval_secs,
            ttl: correlation.entry_ttl_secs,
        });
    }

    if config.redaction.extra_headers.iter().any(|h| h.trim().is_empty()) {
        errors.push(ValidationError::EmptyHeaderName);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&WirelogConfig::default()).is_ok());
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let mut config = WirelogConfig::default();
        config.logging.level = "WARN".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = WirelogConfig::default();
        config.logging.level = "verbose".into();
        config.logging.subsystem = "  ".into();
        config.correlation.entry_ttl_secs = 0;
        config.correlation.max_pending = 0;
        config.redaction.extra_headers = vec![String::new()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::UnknownLevel("verbose".into()),
                ValidationError::EmptySubsystem,
                ValidationError::ZeroValue { field: "entry_ttl_secs" },
                ValidationError::ZeroValue { field: "max_pending" },
                ValidationError::EmptyHeaderName,
            ]
        );
    }

    #[test]
    fn test_sweep_must_not_exceed_ttl() {
        let mut config = WirelogConfig::default();
        config.correlation.entry_ttl_secs = 10;
        config.correlation.sweep_interval_secs = 20;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::SweepSlowerThanTtl { interval: 20, ttl: 10 }]
        );
    }
}
