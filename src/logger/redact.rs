//! Credential masking for logged header sets.

use std::collections::HashMap;

/// Replacement string used for all masked values.
pub const REDACTED: &str = "[REDACTED]";

/// Headers that are always masked, regardless of configuration.
pub const ALWAYS_SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "cookie",
    "set-cookie",
    "proxy-authorization",
    "x-api-key",
    "x-auth-token",
];

/// Renders header maps for log lines, masking credential values.
#[derive(Debug, Clone, Default)]
pub struct HeaderRedactor {
    extra: Vec<String>,
}

impl HeaderRedactor {
    /// `extra` names are matched case-insensitively.
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra: extra
                .into_iter()
                .map(|name| name.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn is_sensitive(&self, name: &str) -> bool {
        let lower = name.to_ascii_lowercase();
        ALWAYS_SENSITIVE_HEADERS.contains(&lower.as_str()) || self.extra.contains(&lower)
    }

    /// `"name: value"` pairs sorted by name and joined by `", "`; `"none"` when empty.
    pub fn render(&self, headers: &HashMap<String, String>) -> String {
        if headers.is_empty() {
            return "none".to_string();
        }

        let mut entries: Vec<_> = headers.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .into_iter()
            .map(|(name, value)| {
                let value = if self.is_sensitive(name) {
                    REDACTED
                } else {
                    value.as_str()
                };
                format!("{}: {}", name, value)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
