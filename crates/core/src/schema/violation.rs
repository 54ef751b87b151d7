//! Field-level violation records.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Schema;

/// Longest string excerpt kept in a violation summary.
const MAX_EXCERPT_CHARS: usize = 32;

/// One place where a JSON value disagreed with its schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// JSON path of the offending value, e.g. `$.cards[1].assignee.id`.
    pub path: String,
    /// Human-readable name of the expected type.
    pub expected: String,
    /// Short summary of what was actually found.
    pub actual: String,
}

impl FieldViolation {
    /// A required field was absent from its parent object.
    pub fn missing(path: String, schema: &Schema) -> Self {
        Self {
            path,
            expected: schema.type_name(),
            actual: "missing".to_string(),
        }
    }

    /// A value was present but of the wrong type or outside an enumeration.
    pub fn mismatch(path: String, schema: &Schema, value: &Value) -> Self {
        Self {
            path,
            expected: schema.type_name(),
            actual: summarize(value),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: expected {}, got {}", self.path, self.expected, self.actual)
    }
}

/// Summarize a JSON value without dumping it whole.
pub fn summarize(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => {
            if s.chars().count() > MAX_EXCERPT_CHARS {
                let excerpt: String = s.chars().take(MAX_EXCERPT_CHARS).collect();
                format!("string \"{excerpt}...\"")
            } else {
                format!("string \"{s}\"")
            }
        }
        Value::Array(items) => format!("array of {} item(s)", items.len()),
        Value::Object(map) => format!("object with {} key(s)", map.len()),
    }
}
