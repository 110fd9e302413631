use std::fmt;

use chrono::NaiveDate;
use serde_json::{json, Value};
use thiserror::Error;

/// The constraint a single field broke.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    #[error("field required")]
    Missing,

    #[error("expected {expected}")]
    InvalidType { expected: &'static str },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown status '{0}'")]
    UnknownStatus(String),

    #[error("at most {max} characters allowed, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("must be between {min} and {max}, got {actual}")]
    OutOfRange { min: f64, max: f64, actual: f64 },

    #[error("must be greater than or equal to 0, got {actual}")]
    Negative { actual: f64 },

    #[error("country must be up to 3-letter ISO alpha-3 code, got '{code}'")]
    CountryCodeTooLong { code: String },

    #[error("the date must not be more than one year in the future (latest {latest})")]
    DateTooFar { latest: NaiveDate },

    #[error("failed '{code}' check")]
    Rule { code: String },
}

impl Violation {
    /// Stable machine-readable tag for client responses.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::Missing => "missing",
            Violation::InvalidType { .. } => "invalid_type",
            Violation::InvalidDate(_) => "invalid_date",
            Violation::UnknownStatus(_) => "unknown_status",
            Violation::TooLong { .. } => "too_long",
            Violation::OutOfRange { .. } => "out_of_range",
            Violation::Negative { .. } => "negative",
            Violation::CountryCodeTooLong { .. } => "country_code",
            Violation::DateTooFar { .. } => "date_too_far",
            Violation::Rule { .. } => "rule",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field}: {violation}")]
pub struct FieldError {
    pub field: String,
    pub violation: Violation,
}

impl FieldError {
    pub fn new(field: impl Into<String>, violation: Violation) -> Self {
        FieldError {
            field: field.into(),
            violation,
        }
    }
}

/// Every violation found in one payload, in field order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        ValidationError { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn violation_for(&self, field: &str) -> Option<&Violation> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.violation)
    }

    /// HTTP status the transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        422
    }

    pub fn to_response_body(&self) -> Value {
        let detail: Vec<Value> = self
            .errors
            .iter()
            .map(|e| {
                json!({
                    "loc": [e.field],
                    "msg": e.violation.to_string(),
                    "type": e.violation.code(),
                })
            })
            .collect();
        json!({ "detail": detail })
    }
}

impl From<FieldError> for ValidationError {
    fn from(error: FieldError) -> Self {
        ValidationError::new(vec![error])
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_field_messages() {
        let err = ValidationError::new(vec![
            FieldError::new("score", Violation::OutOfRange { min: 0.0, max: 100.0, actual: -1.0 }),
            FieldError::new("name", Violation::Missing),
        ]);
        assert_eq!(
            err.to_string(),
            "score: must be between 0 and 100, got -1; name: field required"
        );
    }

    #[test]
    fn response_body_lists_each_violation() {
        let err = ValidationError::from(FieldError::new(
            "country",
            Violation::CountryCodeTooLong { code: "UNITEDSTATES".to_string() },
        ));
        let body = err.to_response_body();
        assert_eq!(err.status_code(), 422);
        assert_eq!(body["detail"][0]["loc"][0], "country");
        assert_eq!(body["detail"][0]["type"], "country_code");
        assert_eq!(body["detail"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn field_error_names_its_field() {
        let err = FieldError::new("overview", Violation::TooLong { max: 255, actual: 300 });
        assert_eq!(err.to_string(), "overview: at most 255 characters allowed, got 300");
    }

    #[test]
    fn looks_up_violation_by_field() {
        let err = ValidationError::new(vec![FieldError::new("budget", Violation::Negative { actual: -0.01 })]);
        assert!(matches!(err.violation_for("budget"), Some(Violation::Negative { .. })));
        assert!(err.violation_for("revenue").is_none());
    }
}
