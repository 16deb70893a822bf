//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → WirelogConfig (validated, immutable)
//!     → handed to init_logging / NetworkLogger::from_config
//! ```
//!
//! # Design Decisions
//! - Every section has defaults so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks
//! - Validation reports every problem at once

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load_config;
pub use schema::{CorrelationConfig, LogFormat, LoggingConfig, RedactionConfig, WirelogConfig};
pub use validation::validate_config;
