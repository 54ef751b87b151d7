//! Runtime response shapes.
//!
//! Every response type is two artifacts kept side by side: a static struct
//! that serde decodes into, and a [`Schema`] table returned by
//! [`Validated::schema`]. The table is checked against the raw JSON first so
//! a mismatch reports every offending path at once; the struct is decoded
//! from the same value afterwards.
//!
//! Presence and nullability are separate rules:
//!
//! - a [`Field::required`] entry must be present. Wrap its schema in
//!   [`Schema::nullable`] to also accept `null`.
//! - a [`Field::optional`] entry may be absent, but must match when present.
//!
//! Unknown extra keys are ignored.

pub mod check;
pub mod violation;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ValidationError;

pub use violation::FieldViolation;

/// Expected shape of a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Pass-through: accepts any value, including an absent body.
    Any,
    String,
    /// A JSON number with no fractional part.
    Integer,
    Number,
    Boolean,
    /// An RFC 3339 timestamp string.
    DateTime,
    /// A string drawn from a fixed set.
    OneOf(&'static [&'static str]),
    Nullable(Box<Schema>),
    Array(Box<Schema>),
    Object(Vec<Field>),
}

/// One named entry of an [`Schema::Object`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub schema: Schema,
    pub optional: bool,
}

impl Field {
    pub fn required(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            optional: false,
        }
    }

    pub fn optional(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            optional: true,
        }
    }
}

impl Schema {
    pub fn nullable(inner: Schema) -> Self {
        Schema::Nullable(Box::new(inner))
    }

    pub fn array_of(item: Schema) -> Self {
        Schema::Array(Box::new(item))
    }

    pub fn object(fields: impl IntoIterator<Item = Field>) -> Self {
        Schema::Object(fields.into_iter().collect())
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, Schema::Any)
    }

    /// Name used in violation messages.
    pub fn type_name(&self) -> String {
        match self {
            Schema::Any => "any".to_string(),
            Schema::String => "string".to_string(),
            Schema::Integer => "integer".to_string(),
            Schema::Number => "number".to_string(),
            Schema::Boolean => "boolean".to_string(),
            Schema::DateTime => "RFC 3339 timestamp".to_string(),
            Schema::OneOf(values) => format!("one of [{}]", values.join(", ")),
            Schema::Nullable(inner) => format!("{} | null", inner.type_name()),
            Schema::Array(item) => format!("array of {}", item.type_name()),
            Schema::Object(_) => "object".to_string(),
        }
    }

    /// Collect every violation of this schema found in `value`.
    pub fn check(&self, value: &Value) -> Vec<FieldViolation> {
        check::check_value(self, value)
    }
}

/// A response type with a runtime shape table.
///
/// `schema()` must describe exactly what the type's `Deserialize` impl
/// accepts. The fixture tests beside each model hold the two in step.
pub trait Validated: DeserializeOwned {
    fn schema() -> Schema;
}

/// Check `value` against `T`'s schema, then decode it.
pub fn validate<T: Validated>(value: Value) -> Result<T, ValidationError> {
    let violations = T::schema().check(&value);
    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }
    // A decode failure here means the table and the struct have drifted.
    serde_json::from_value(value)
        .map_err(|e| ValidationError::at_root("decodable value", e.to_string()))
}

/// Target type for calls whose response body is ignored (deletes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoContent;

impl<'de> Deserialize<'de> for NoContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer).map(|_| NoContent)
    }
}

impl Validated for NoContent {
    fn schema() -> Schema {
        Schema::Any
    }
}
