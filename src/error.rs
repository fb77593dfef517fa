//! Error types for the portfolio projection crate
//!
//! The projection core itself never fails; errors come from the layers around it
//! (parameter validation, saved state, CSV export and batch input).

use crate::params::ValidationErrors;
use thiserror::Error;

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, ProjectionError>;

#[derive(Debug, Error)]
pub enum ProjectionError {
    /// One or more input fields were rejected before reaching the engine.
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] ValidationErrors),

    /// A batch input row failed validation.
    #[error("row {row}: {errors}")]
    InvalidRow { row: usize, errors: ValidationErrors },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FieldError;

    #[test]
    fn test_invalid_row_message_names_row_and_field() {
        let err = ProjectionError::InvalidRow {
            row: 3,
            errors: ValidationErrors::new(vec![FieldError::new("years", "must be between 1 and 50")]),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("row 3:"), "got {msg}");
        assert!(msg.contains("years"));
    }

    #[test]
    fn test_validation_errors_convert() {
        let errors = ValidationErrors::new(vec![FieldError::new("annual_fee", "must not be negative")]);
        let err: ProjectionError = errors.into();
        assert!(matches!(err, ProjectionError::InvalidParams(_)));
    }
}
