//! Cross-cutting logging utilities.
//!
//! - [`correlation`]: request/response logging with round-trip timing
//! - [`logger`]: category-tagged structured logging facade
//! - [`crash`]: panic and fatal-signal reporting
//! - [`bytes`]: hex rendering and header splitting
//! - [`config`], [`observability`]: configuration and subscriber setup

pub mod bytes;
pub mod config;
pub mod correlation;
pub mod crash;
pub mod error;
pub mod logger;
pub mod observability;

pub use config::WirelogConfig;
pub use correlation::{NetworkLogger, RequestDescriptor, ResponseMeta, RoundTrip};
pub use crash::{install_panic_hook, CrashLogger};
pub use logger::{Category, Logger, Severity};
