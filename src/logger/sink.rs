//! Log sinks.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::{Map, Value};

use crate::config::LoggingConfig;
use crate::logger::record::{LogRecord, Severity, Visibility};

/// Placeholder rendered for private field values.
pub const PRIVATE_PLACEHOLDER: &str = "<private>";

/// Destination for structured records.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: &LogRecord);
}

/// Forwards records to the global `tracing` dispatcher.
///
/// Well-known record fields become event fields of the same name. Anything
/// else is collected into one JSON object recorded as `extra`.
#[derive(Debug, Clone)]
pub struct TracingSink {
    subsystem: String,
    reveal_private: bool,
}

/// Record fields in the shape handed to `tracing`.
#[derive(Debug, Default, PartialEq, Eq)]
struct EventFields {
    timestamp: Option<String>,
    method: Option<String>,
    url: Option<String>,
    headers: Option<String>,
    body: Option<String>,
    duration: Option<String>,
    status: Option<String>,
    error: Option<String>,
    signal: Option<String>,
    stack_trace: Option<String>,
    extra: Option<String>,
}

impl EventFields {
    fn slot(&mut self, name: &str) -> Option<&mut Option<String>> {
        let slot = match name {
            "timestamp" => &mut self.timestamp,
            "method" => &mut self.method,
            "url" => &mut self.url,
            "headers" => &mut self.headers,
            "body" => &mut self.body,
            "duration" => &mut self.duration,
            "status" => &mut self.status,
            "error" => &mut self.error,
            "signal" => &mut self.signal,
            "stack_trace" => &mut self.stack_trace,
            _ => return None,
        };
        Some(slot)
    }
}

impl TracingSink {
    pub fn new(subsystem: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            reveal_private: false,
        }
    }

    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::new(config.subsystem.clone()).reveal_private(config.reveal_private)
    }

    pub fn reveal_private(mut self, reveal: bool) -> Self {
        self.reveal_private = reveal;
        self
    }

    fn render_fields(&self, record: &LogRecord) -> EventFields {
        let mut fields = EventFields::default();
        let mut extra = Map::new();
        for field in &record.fields {
            let value = match field.visibility {
                Visibility::Private if !self.reveal_private => PRIVATE_PLACEHOLDER.to_string(),
                _ => field.value.clone(),
            };
            match fields.slot(field.name) {
                // First occurrence wins, as with `LogRecord::field`.
                Some(slot) => {
                    if slot.is_none() {
                        *slot = Some(value);
                    }
                }
                None => {
                    extra
                        .entry(field.name.to_string())
                        .or_insert(Value::String(value));
                }
            }
        }
        if !extra.is_empty() {
            fields.extra = Some(Value::Object(extra).to_string());
        }
        fields
    }
}

// `tracing` needs the level as a constant at each callsite.
macro_rules! sink_event {
    ($level:expr, $subsystem:expr, $category:expr, $fault:expr, $f:expr, $message:expr) => {
        tracing::event!(
            $level,
            subsystem = $subsystem,
            category = $category,
            fault = $fault,
            timestamp = $f.timestamp.as_deref(),
            method = $f.method.as_deref(),
            url = $f.url.as_deref(),
            headers = $f.headers.as_deref(),
            body = $f.body.as_deref(),
            duration = $f.duration.as_deref(),
            status = $f.status.as_deref(),
            error = $f.error.as_deref(),
            signal = $f.signal.as_deref(),
            stack_trace = $f.stack_trace.as_deref(),
            extra = $f.extra.as_deref(),
            "{}",
            $message
        )
    };
}

impl LogSink for TracingSink {
    fn emit(&self, record: &LogRecord) {
        let fields = self.render_fields(record);
        let subsystem = self.subsystem.as_str();
        let category = record.category.as_str();
        let message = record.message.as_str();
        let fault = matches!(record.severity, Severity::Fault).then_some(true);

        match record.severity {
            Severity::Debug => {
                sink_event!(tracing::Level::DEBUG, subsystem, category, fault, fields, message)
            }
            Severity::Info => {
                sink_event!(tracing::Level::INFO, subsystem, category, fault, fields, message)
            }
            Severity::Error | Severity::Fault => {
                sink_event!(tracing::Level::ERROR, subsystem, category, fault, fields, message)
            }
        }
    }
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the captured records.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Drain the captured records.
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: &LogRecord) {
        self.lock().push(record.clone());
    }
}
