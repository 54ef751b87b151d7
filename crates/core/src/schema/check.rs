//! Schema walker -- pure logic, no I/O.

use serde_json::Value;

use super::violation::FieldViolation;
use super::Schema;

/// Walk `value` against `schema`, collecting every violation.
///
/// Nested objects and array items are always descended into, so a single
/// call reports all offending paths of a response.
pub fn check_value(schema: &Schema, value: &Value) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    walk(schema, value, "$", &mut violations);
    violations
}

fn walk(schema: &Schema, value: &Value, path: &str, out: &mut Vec<FieldViolation>) {
    match schema {
        Schema::Any => {}
        Schema::Nullable(inner) => {
            if !value.is_null() {
                walk(inner, value, path, out);
            }
        }
        Schema::Array(item) => match value.as_array() {
            Some(items) => {
                for (index, element) in items.iter().enumerate() {
                    walk(item, element, &format!("{path}[{index}]"), out);
                }
            }
            None => out.push(FieldViolation::mismatch(path.to_string(), schema, value)),
        },
        Schema::Object(fields) => match value.as_object() {
            Some(map) => {
                for field in fields {
                    let field_path = format!("{path}.{}", field.name);
                    match map.get(field.name) {
                        Some(field_value) => walk(&field.schema, field_value, &field_path, out),
                        None if field.optional || field.schema.is_pass_through() => {}
                        None => out.push(FieldViolation::missing(field_path, &field.schema)),
                    }
                }
            }
            None => out.push(FieldViolation::mismatch(path.to_string(), schema, value)),
        },
        leaf => {
            if !matches_leaf(leaf, value) {
                out.push(FieldViolation::mismatch(path.to_string(), leaf, value));
            }
        }
    }
}

fn matches_leaf(schema: &Schema, value: &Value) -> bool {
    match schema {
        Schema::String => value.is_string(),
        Schema::Integer => value.is_i64() || value.is_u64(),
        Schema::Number => value.is_number(),
        Schema::Boolean => value.is_boolean(),
        Schema::DateTime => value
            .as_str()
            .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok()),
        Schema::OneOf(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
        // Containers are handled by `walk`.
        Schema::Any | Schema::Nullable(_) | Schema::Array(_) | Schema::Object(_) => true,
    }
}
