//! Category-tagged logging facade.
//!
//! # Data Flow
//! ```text
//! caller
//!     → Logger::{debug,info,error,fault} / Logger::log
//!     → LogRecord (severity, category, message, typed fields)
//!     → LogSink::emit
//!         → TracingSink (tracing events, private fields masked)
//!         → MemorySink (captured for assertions)
//! ```
//!
//! # Design Decisions
//! - Messages are never format strings; values travel as fields
//! - Field visibility is decided by the caller, rendering by the sink
//! - Emission never fails and never panics

pub mod record;
pub mod redact;
pub mod sink;

use std::fmt;
use std::sync::Arc;

use crate::config::LoggingConfig;

pub use record::{Category, Field, LogRecord, Severity, Visibility};
pub use redact::{HeaderRedactor, ALWAYS_SENSITIVE_HEADERS, REDACTED};
pub use sink::{LogSink, MemorySink, TracingSink};

/// Cheaply clonable handle to a log sink.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Logger backed by a [`TracingSink`] built from `config`.
    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::new(Arc::new(TracingSink::from_config(config)))
    }

    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// Hand a fully built record to the sink.
    pub fn emit(&self, record: &LogRecord) {
        self.sink.emit(record);
    }

    pub fn log(
        &self,
        severity: Severity,
        category: Category,
        message: impl Into<String>,
        fields: Vec<Field>,
    ) {
        let mut record = LogRecord::new(severity, category, message);
        record.fields = fields;
        self.emit(&record);
    }

    /// Critical errors and failures.
    pub fn error(&self, category: Category, message: impl Into<String>) {
        self.log(Severity::Error, category, message, Vec::new());
    }

    /// Information that helps troubleshooting but is not essential.
    pub fn info(&self, category: Category, message: impl Into<String>) {
        self.log(Severity::Info, category, message, Vec::new());
    }

    /// Development-time detail.
    pub fn debug(&self, category: Category, message: impl Into<String>) {
        self.log(Severity::Debug, category, message, Vec::new());
    }

    /// System-level failures only.
    pub fn fault(&self, category: Category, message: impl Into<String>) {
        self.log(Severity::Fault, category, message, Vec::new());
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_config(&LoggingConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_methods_set_severity() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(sink.clone());

        logger.error(Category::Events, "e");
        logger.info(Category::Events, "i");
        logger.debug(Category::Test, "d");
        logger.fault(Category::Crash, "f");

        let severities: Vec<_> = sink.records().iter().map(|r| r.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Error, Severity::Info, Severity::Debug, Severity::Fault]
        );
        assert_eq!(sink.records()[3].category, Category::Crash);
    }

    #[test]
    fn test_log_keeps_fields_in_order() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(sink.clone());

        logger.log(
            Severity::Info,
            Category::Custom("sync_contacts".into()),
            "synced",
            vec![Field::public("count", "3"), Field::private("owner", "alice")],
        );

        let record = &sink.records()[0];
        assert_eq!(record.category.as_str(), "sync_contacts");
        assert_eq!(record.field("count"), Some("3"));
        assert_eq!(record.fields[1].visibility, Visibility::Private);
    }

    #[test]
    fn test_clones_share_the_sink() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(sink.clone());
        let clone = logger.clone();

        logger.info(Category::Events, "a");
        clone.info(Category::Events, "b");
        assert_eq!(sink.len(), 2);
    }
}
