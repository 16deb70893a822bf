//! Shared utilities for integration tests.

use std::sync::Arc;

use wirelog::logger::MemorySink;
use wirelog::{Logger, NetworkLogger, RequestDescriptor};

/// Network logger writing into a fresh in-memory sink.
pub fn memory_network_logger() -> (NetworkLogger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (NetworkLogger::new(Logger::new(sink.clone())), sink)
}

/// A distinct request per `n`.
#[allow(dead_code)]
pub fn numbered_request(n: usize) -> RequestDescriptor {
    RequestDescriptor::new("POST", format!("https://api.test/items/{}", n))
        .with_header("content-type", "application/json")
        .with_header("x-request-seq", n.to_string())
        .with_body(format!("{{\"n\":{}}}", n))
}
