//! Validation utilities.

use crate::{FieldError, GorestError, GorestResult};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Runs the declarative field rules and returns every failure.
    fn field_errors(&self) -> Vec<FieldError> {
        self.validate()
            .map_or_else(|e| validation_errors_to_field_errors(&e), |()| Vec::new())
    }

    /// Validates the struct and returns a `GorestError` on failure.
    fn validate_request(&self) -> GorestResult<()> {
        ValidationReport::from(self.field_errors()).into_result()
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to field errors, ordered by field name.
#[must_use]
pub fn validation_errors_to_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();

    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Accumulates field errors so a request reports every problem at once.
#[derive(Debug, Default, Clone)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error against a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>, code: &str) {
        self.errors.push(FieldError::new(field, message, code));
    }

    /// Appends already-built field errors.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = FieldError>) {
        self.errors.extend(errors);
    }

    /// Returns true if any field failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the collected errors.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Converts to a result, failing with [`GorestError::InvalidFields`].
    pub fn into_result(self) -> GorestResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(GorestError::InvalidFields(self.errors))
        }
    }
}

impl From<Vec<FieldError>> for ValidationReport {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

/// Common validation functions.
pub mod rules {
    use crate::ResourceId;
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that a reference id has been filled in.
    pub fn assigned(id: &ResourceId) -> Result<(), ValidationError> {
        if id.is_unassigned() {
            return Err(ValidationError::new("required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use crate::ResourceId;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("  padded  ").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_assigned() {
        assert!(assigned(&ResourceId(5)).is_ok());
        assert!(assigned(&ResourceId(0)).is_err());
    }

    #[test]
    fn test_report_collects_errors() {
        let mut report = ValidationReport::new();
        assert!(!report.has_errors());

        report.add("id", "ID cannot be left blank", "required");
        report.add("title", "Title cannot be left blank.", "not_blank");

        assert!(report.has_errors());
        assert_eq!(report.errors().len(), 2);

        match report.into_result() {
            Err(GorestError::InvalidFields(errors)) => {
                assert_eq!(errors[0].field, "id");
                assert_eq!(errors[1].field, "title");
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_report_is_ok() {
        assert!(ValidationReport::new().into_result().is_ok());
    }
}
