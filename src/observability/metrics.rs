//! Metrics collection.
//!
//! # Metrics
//! - `wirelog_requests_logged_total` (counter)
//! - `wirelog_responses_logged_total` (counter): by `outcome` (matched, unknown, unmatched)
//! - `wirelog_round_trip_seconds` (histogram): request → response latency
//! - `wirelog_pending_requests` (gauge): entries waiting for a response, summed
//!   over every pending table in the process
//! - `wirelog_pending_evicted_total` (counter): entries dropped by TTL or capacity
//!
//! Without an installed recorder every call is a no-op.

use std::time::Duration;

pub fn record_request_logged() {
    ::metrics::counter!("wirelog_requests_logged_total").increment(1);
}

pub fn record_response_logged(outcome: &'static str) {
    ::metrics::counter!("wirelog_responses_logged_total", "outcome" => outcome).increment(1);
}

pub fn record_round_trip(elapsed: Duration) {
    ::metrics::histogram!("wirelog_round_trip_seconds").record(elapsed.as_secs_f64());
}

pub fn record_pending_added(count: usize) {
    ::metrics::gauge!("wirelog_pending_requests").increment(count as f64);
}

pub fn record_pending_removed(count: usize) {
    ::metrics::gauge!("wirelog_pending_requests").decrement(count as f64);
}

pub fn record_evicted(count: usize) {
    ::metrics::counter!("wirelog_pending_evicted_total").increment(count as u64);
}
