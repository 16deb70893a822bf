//! Request/response logger for the networking category.

use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::bytes::bytes_to_hex;
use crate::config::{CorrelationConfig, WirelogConfig};
use crate::correlation::descriptor::{RequestDescriptor, ResponseMeta};
use crate::correlation::key::CorrelationKey;
use crate::correlation::sweeper::{spawn_sweeper, SweeperHandle};
use crate::correlation::table::PendingTable;
use crate::correlation::timing::{format_elapsed, log_timestamp, UNKNOWN_DURATION};
use crate::logger::{Category, Field, HeaderRedactor, LogRecord, Logger, Severity};
use crate::observability::metrics;

/// Binary bodies are logged as hex, capped at this many bytes.
const MAX_HEX_BODY_BYTES: usize = 64;

/// How a response was matched against the pending table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTrip {
    /// The request was pending; elapsed time since it was logged.
    Elapsed(Duration),
    /// A request was supplied but was not pending.
    Unknown,
    /// No request was supplied at all.
    Unmatched,
}

impl RoundTrip {
    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            RoundTrip::Elapsed(d) => Some(*d),
            _ => None,
        }
    }

    /// Text used in the `duration` field.
    pub fn duration_string(&self) -> String {
        match self {
            RoundTrip::Elapsed(d) => format_elapsed(*d),
            _ => UNKNOWN_DURATION.to_string(),
        }
    }

    fn outcome(&self) -> &'static str {
        match self {
            RoundTrip::Elapsed(_) => "matched",
            RoundTrip::Unknown => "unknown",
            RoundTrip::Unmatched => "unmatched",
        }
    }
}

/// Logs outbound requests and their responses with round-trip timing.
///
/// Cheap to share behind an `Arc`; each instance owns its pending table.
#[derive(Debug)]
pub struct NetworkLogger {
    logger: Logger,
    table: Arc<PendingTable>,
    redactor: HeaderRedactor,
    sweep_interval: Duration,
}

impl NetworkLogger {
    pub fn new(logger: Logger) -> Self {
        Self::with_table(logger, Arc::new(PendingTable::new()))
    }

    pub fn with_table(logger: Logger, table: Arc<PendingTable>) -> Self {
        Self {
            logger,
            table,
            redactor: HeaderRedactor::default(),
            sweep_interval: CorrelationConfig::default().sweep_interval(),
        }
    }

    pub fn from_config(config: &WirelogConfig) -> Self {
        Self::with_table(
            Logger::from_config(&config.logging),
            Arc::new(PendingTable::from_config(&config.correlation)),
        )
        .redactor(HeaderRedactor::new(&config.redaction.extra_headers))
        .sweep_interval(config.correlation.sweep_interval())
    }

    pub fn sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    pub fn redactor(mut self, redactor: HeaderRedactor) -> Self {
        self.redactor = redactor;
        self
    }

    pub fn table(&self) -> &Arc<PendingTable> {
        &self.table
    }

    /// Start evicting requests that never got a response, at the
    /// configured sweep interval.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn_sweeper(&self) -> SweeperHandle {
        spawn_sweeper(self.table.clone(), self.sweep_interval)
    }

    /// Record the issue time of `request` and log it.
    pub fn log_request(&self, request: &RequestDescriptor) -> CorrelationKey {
        let timestamp = log_timestamp();
        let key = request.key();
        self.table.insert(key.clone(), Instant::now());
        metrics::record_request_logged();

        let mut record = LogRecord::new(Severity::Info, Category::Networking, "API request");
        record.push(Field::public("timestamp", timestamp));
        record.push(Field::public("method", request.method.as_str()));
        record.push(Field::public("url", request.url.as_str()));
        record.push(Field::public("headers", self.redactor.render(&request.headers)));
        if let Some(body) = request.body.as_deref() {
            record.push(Field::private("body", render_body(body)));
        }
        self.logger.emit(&record);

        key
    }

    /// Match a response to its request and log it with the round-trip time.
    ///
    /// Every argument is optional; missing pieces only thin out the record.
    pub fn log_response(
        &self,
        request: Option<&RequestDescriptor>,
        response: Option<&ResponseMeta>,
        body: Option<&[u8]>,
        error: Option<&dyn Error>,
    ) -> RoundTrip {
        let timestamp = log_timestamp();

        let Some(request) = request else {
            metrics::record_response_logged(RoundTrip::Unmatched.outcome());
            let mut record = LogRecord::new(
                Severity::Info,
                Category::Networking,
                "response received but request is missing",
            );
            record.push(Field::public("timestamp", timestamp));
            self.logger.emit(&record);
            return RoundTrip::Unmatched;
        };

        let round_trip = match self.table.take(&request.key()) {
            Some(issued) => RoundTrip::Elapsed(issued.elapsed()),
            None => RoundTrip::Unknown,
        };
        metrics::record_response_logged(round_trip.outcome());
        if let Some(elapsed) = round_trip.elapsed() {
            metrics::record_round_trip(elapsed);
        }

        let severity = if error.is_some() {
            Severity::Error
        } else {
            Severity::Info
        };
        let mut record = LogRecord::new(severity, Category::Networking, "API response");
        record.push(Field::public("timestamp", timestamp));
        record.push(Field::public("duration", round_trip.duration_string()));
        record.push(Field::public("method", request.method.as_str()));
        record.push(Field::public("url", request.url.as_str()));
        if let Some(response) = response {
            record.push(Field::public("status", response.status.to_string()));
            record.push(Field::public("headers", self.redactor.render(&response.headers)));
        }
        if let Some(text) = body.and_then(|b| std::str::from_utf8(b).ok()) {
            record.push(Field::public("body", text));
        }
        if let Some(error) = error {
            record.push(Field::public("error", error.to_string()));
        }
        self.logger.emit(&record);

        round_trip
    }

    /// Log the outcome of a `reqwest` call for `request`.
    ///
    /// The response body is not read; use [`log_response`](Self::log_response)
    /// when it has been buffered.
    pub fn log_reqwest_result(
        &self,
        request: &RequestDescriptor,
        result: &Result<reqwest::Response, reqwest::Error>,
    ) -> RoundTrip {
        match result {
            Ok(response) => {
                let meta = ResponseMeta::from(response);
                self.log_response(Some(request), Some(&meta), None, None)
            }
            Err(err) => self.log_response(Some(request), None, None, Some(err)),
        }
    }
}

/// Text bodies verbatim, binary bodies as truncated hex.
fn render_body(body: &[u8]) -> String {
    match std::str::from_utf8(body) {
        Ok(text) => text.to_string(),
        Err(_) if body.len() > MAX_HEX_BODY_BYTES => format!(
            "{} ... ({} bytes)",
            bytes_to_hex(&body[..MAX_HEX_BODY_BYTES], " "),
            body.len()
        ),
        Err(_) => bytes_to_hex(body, " "),
    }
}
