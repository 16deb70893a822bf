//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::WirelogConfig;
use crate::config::validation::validate_config;
use crate::error::ConfigError;

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<WirelogConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = WirelogConfig::from_toml_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let file = format!("wirelog-{}-{}.toml", name, std::process::id());
        let path = std::env::temp_dir().join(file);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp("valid", "[logging]\nlevel = \"debug\"\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.logging.level, "debug");
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wirelog-does-not-exist.toml");
        assert!(matches!(load_config(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_values_are_validation_error() {
        let path = write_temp("invalid", "[correlation]\nentry_ttl_secs = 0\n");
        match load_config(&path) {
            Err(ConfigError::Validation(errors)) => assert!(!errors.is_empty()),
            other => panic!("expected validation error, got {:?}", other),
        }
        fs::remove_file(path).unwrap_or_default();
    }
}
