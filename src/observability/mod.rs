//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (global tracing subscriber, fed by TracingSink)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log collector (stdout, text or JSON lines)
//!     → Whatever `metrics` recorder the application installs
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Metrics are cheap and recorder-agnostic; no exporter is installed here

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
