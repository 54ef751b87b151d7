use crate::schema::FieldViolation;

/// A response body that did not match its expected shape.
///
/// Carries every violation found in one pass over the value, not only the
/// first one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Response failed validation: {}", render(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Shorthand for a single violation at the document root.
    pub fn at_root(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(vec![FieldViolation {
            path: "$".to_string(),
            expected: expected.into(),
            actual: actual.into(),
        }])
    }

    /// Paths of all offending fields, in the order they were found.
    pub fn paths(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }
}

fn render(violations: &[FieldViolation]) -> String {
    let listed: Vec<String> = violations.iter().map(ToString::to_string).collect();
    format!("{} violation(s): {}", violations.len(), listed.join("; "))
}
