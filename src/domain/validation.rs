// src/domain/validation.rs
//
// Field-level validation support shared by the form invariants.
//
// Every form is validated as a whole: each violated rule contributes one
// FieldError, and the caller receives the full set at once rather than the
// first failure only.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use crate::domain::{DomainError, DomainResult};

/// A single violated field rule, addressed by the wire name of the field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Accumulates field errors while a form is checked.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First error recorded for the named field, if any.
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Ok when no rule was violated, otherwise the collected errors.
    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// Shape check for email addresses: local part, one '@', dotted domain.
/// Deliberately loose; the forms only ever required this much.
pub fn is_valid_email(value: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));
    re.is_match(value)
}

/// Character count, not byte length. Matches how the forms counted input.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("jane@nodot"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_collected_errors_preserve_order() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Name must be at least 2 characters");
        errors.push("email", "Invalid email address");

        assert!(!errors.is_empty());
        assert_eq!(errors.errors().len(), 2);
        assert_eq!(errors.errors()[0].field, "name");
        assert!(errors.for_field("email").is_some());
        assert!(errors.for_field("phone").is_none());
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_empty_set_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
