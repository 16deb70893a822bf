//! Correlation key generation.

use std::collections::HashMap;
use std::fmt;

use sha2::{Digest, Sha256};

/// Digest bytes kept in a key (32 hex characters).
const KEY_BYTES: usize = 16;

/// Opaque identifier matching a response to its originating request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CorrelationKey(String);

impl CorrelationKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `"<method> <url> <sorted headers> <body>"`, headers as `"name: value"` joined by `", "`.
pub fn canonical_string(
    method: &str,
    url: &str,
    headers: &HashMap<String, String>,
    body: &str,
) -> String {
    let mut entries: Vec<_> = headers.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    let headers = entries
        .into_iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{} {} {} {}", method, url, headers, body)
}

/// Derive the correlation key for a request. Pure and infallible.
pub fn generate_key(
    method: &str,
    url: &str,
    headers: &HashMap<String, String>,
    body: &str,
) -> CorrelationKey {
    let canonical = canonical_string(method, url, headers, body);
    let digest = Sha256::digest(canonical.as_bytes());
    CorrelationKey(hex::encode(&digest[..KEY_BYTES]))
}
