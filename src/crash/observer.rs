//! Fatal-event observer and its logging implementation.

use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;

use crate::logger::{Category, Field, LogRecord, Logger, Severity};

/// Signals conventionally reported as crashes.
pub const FATAL_SIGNALS: &[&str] = &["SIGABRT", "SIGILL", "SIGSEGV", "SIGFPE", "SIGBUS", "SIGPIPE"];

/// What brought the process down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FatalCause {
    Panic {
        message: String,
        location: Option<String>,
    },
    Signal(String),
}

/// A crash as seen by observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalEvent {
    pub cause: FatalCause,
    pub stack_trace: String,
}

impl FatalEvent {
    pub fn from_signal(name: impl Into<String>) -> Self {
        Self {
            cause: FatalCause::Signal(name.into()),
            stack_trace: Backtrace::force_capture().to_string(),
        }
    }

    pub fn from_panic(info: &PanicHookInfo<'_>, backtrace: &Backtrace) -> Self {
        let payload = info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));

        Self {
            cause: FatalCause::Panic { message, location },
            stack_trace: backtrace.to_string(),
        }
    }

    /// One-line summary used as the log message.
    pub fn description(&self) -> String {
        match &self.cause {
            FatalCause::Panic {
                message,
                location: Some(location),
            } => format!("uncaught panic at {}: {}", location, message),
            FatalCause::Panic { message, location: None } => format!("uncaught panic: {}", message),
            FatalCause::Signal(name) => format!("crashed due to signal: {}", name),
        }
    }
}

/// Receives crash notifications. Implementations must not panic.
pub trait FatalEventObserver: Send + Sync {
    fn on_fatal(&self, event: &FatalEvent);
}

/// Reports crashes as `Fault` records in the `crash` category.
#[derive(Debug, Clone)]
pub struct CrashLogger {
    logger: Logger,
}

impl CrashLogger {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl FatalEventObserver for CrashLogger {
    fn on_fatal(&self, event: &FatalEvent) {
        let mut record = LogRecord::new(Severity::Fault, Category::Crash, event.description());
        if let FatalCause::Signal(name) = &event.cause {
            record.push(Field::public("signal", name.as_str()));
        }
        record.push(Field::public("stack_trace", event.stack_trace.as_str()));
        self.logger.emit(&record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::MemorySink;
    use std::sync::Arc;

    #[test]
    fn test_signal_event_is_logged_as_fault() {
        let sink = Arc::new(MemorySink::new());
        let observer = CrashLogger::new(Logger::new(sink.clone()));

        observer.on_fatal(&FatalEvent::from_signal("SIGSEGV"));

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Fault);
        assert_eq!(records[0].category, Category::Crash);
        assert_eq!(records[0].message, "crashed due to signal: SIGSEGV");
        assert_eq!(records[0].field("signal"), Some("SIGSEGV"));
        assert!(records[0].field("stack_trace").is_some());
    }

    #[test]
    fn test_panic_descriptions() {
        let located = FatalEvent {
            cause: FatalCause::Panic {
                message: "boom".into(),
                location: Some("src/main.rs:3:5".into()),
            },
            stack_trace: String::new(),
        };
        assert_eq!(located.description(), "uncaught panic at src/main.rs:3:5: boom");

        let bare = FatalEvent {
            cause: FatalCause::Panic {
                message: "boom".into(),
                location: None,
            },
            stack_trace: String::new(),
        };
        assert_eq!(bare.description(), "uncaught panic: boom");
    }

    #[test]
    fn test_fatal_signal_list() {
        assert!(FATAL_SIGNALS.contains(&"SIGABRT"));
        assert_eq!(FATAL_SIGNALS.len(), 6);
    }
}
