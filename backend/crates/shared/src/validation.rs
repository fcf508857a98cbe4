//! Field Validation
//!
//! Collects every rejected input field of a request before failing, so the
//! client receives the whole list in one response.

use serde::Serialize;

use crate::error::app_error::{AppError, AppResult};

/// One rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    #[serde(rename = "msg")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulator for field errors
///
/// ## Examples
/// ```rust
/// use kernel::validation::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.require("text", "", "Text is required");
/// assert!(errors.into_result().is_err());
/// ```
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    /// Record an error when `ok` is false
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.push(field, message);
        }
    }

    /// Record an error when the value is blank after trimming
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        self.check(!value.trim().is_empty(), field, message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when nothing was recorded, otherwise a 400 listing every field
    pub fn into_result(self) -> AppResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_passes() {
        let mut errors = FieldErrors::new();
        errors.require("status", "Developer", "Status is required");
        assert!(errors.is_empty());
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_collects_all_fields() {
        let mut errors = FieldErrors::new();
        errors.require("status", "   ", "Status is required");
        errors.require("skills", "", "Skills is required");
        errors.check(true, "from", "unused");

        let err = errors.into_result().unwrap_err();
        let fields: Vec<&str> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["status", "skills"]);
    }

    #[test]
    fn test_serializes_msg_key() {
        let json = serde_json::to_value(FieldError::new("text", "Text is required")).unwrap();
        assert_eq!(json["msg"], "Text is required");
        assert_eq!(json["field"], "text");
    }
}
