//! Structured log records.

use std::fmt;

use serde::{Serialize, Serializer};

/// Log classification controlling visibility and urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Error,
    /// System-level or multi-process failures.
    Fault,
}

/// Category tag attached to every record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Networking,
    Events,
    Test,
    Crash,
    /// Free-form tag, typically the calling operation's name.
    Custom(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Networking => "networking",
            Category::Events => "events",
            Category::Test => "test",
            Category::Crash => "crash",
            Category::Custom(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Whether a sink may render a field value in clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// A named, typed-by-convention log field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub value: String,
    pub visibility: Visibility,
}

impl Field {
    pub fn public(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            visibility: Visibility::Public,
        }
    }

    pub fn private(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            visibility: Visibility::Private,
        }
    }
}

/// One structured log entry as handed to a sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub fields: Vec<Field>,
}

impl LogRecord {
    pub fn new(severity: Severity, category: Category, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Value of the first field called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Serialise to a compact JSON line. Private values are included verbatim.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
