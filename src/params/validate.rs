//! Field-level validation of raw inputs
//!
//! Every field is checked and every problem reported, so a form can flag all
//! offending fields at once. Nothing reaches the engine unless all fields pass.

use super::data::{ProjectionParams, RawParams, MAX_YEARS, MIN_YEARS};
use std::fmt;

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors found in one set of raw inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Error for a given field, if that field was rejected
    pub fn field(&self, name: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == name)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn check_finite(errors: &mut Vec<FieldError>, field: &'static str, value: f64) -> bool {
    if !value.is_finite() {
        errors.push(FieldError::new(field, format!("must be a finite number, got {value}")));
        return false;
    }
    true
}

fn check_non_negative(errors: &mut Vec<FieldError>, field: &'static str, value: f64) {
    if check_finite(errors, field, value) && value < 0.0 {
        errors.push(FieldError::new(field, format!("must not be negative, got {value}")));
    }
}

/// Validate raw inputs into engine parameters
pub fn validate(raw: &RawParams) -> Result<ProjectionParams, ValidationErrors> {
    let mut errors = Vec::new();

    check_non_negative(&mut errors, "initial_capital", raw.initial_capital);
    check_non_negative(&mut errors, "monthly_contribution", raw.monthly_contribution);
    check_finite(&mut errors, "gross_annual_return", raw.gross_annual_return);
    check_non_negative(&mut errors, "annual_fee", raw.annual_fee);
    check_non_negative(&mut errors, "annual_inflation", raw.annual_inflation);

    if check_finite(&mut errors, "years", raw.years) {
        if raw.years.fract() != 0.0 {
            errors.push(FieldError::new("years", format!("must be a whole number, got {}", raw.years)));
        } else if raw.years < MIN_YEARS as f64 || raw.years > MAX_YEARS as f64 {
            errors.push(FieldError::new(
                "years",
                format!("must be between {MIN_YEARS} and {MAX_YEARS}, got {}", raw.years),
            ));
        }
    }

    if !errors.is_empty() {
        return Err(ValidationErrors::new(errors));
    }

    Ok(ProjectionParams::new(
        raw.initial_capital,
        raw.monthly_contribution,
        raw.gross_annual_return,
        raw.annual_fee,
        raw.annual_inflation,
        raw.years as u32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = validate(&RawParams::default()).unwrap();
        assert_eq!(params.years, 20);
        assert_eq!(params.total_months(), 240);
    }

    #[test]
    fn test_negative_gross_return_allowed() {
        let raw = RawParams {
            gross_annual_return: -100.0,
            ..RawParams::default()
        };
        assert!(validate(&raw).is_ok());
    }

    #[test]
    fn test_collects_every_field_error() {
        let raw = RawParams {
            initial_capital: -1.0,
            monthly_contribution: f64::NAN,
            gross_annual_return: f64::INFINITY,
            annual_fee: -0.5,
            annual_inflation: -2.0,
            years: 0.0,
        };
        let errors = validate(&raw).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors.field("initial_capital").is_some());
        assert!(errors.field("monthly_contribution").unwrap().message.contains("finite"));
        assert!(errors.field("years").unwrap().message.contains("between 1 and 50"));
    }

    #[test]
    fn test_years_bounds() {
        for years in [1.0, 50.0] {
            let raw = RawParams { years, ..RawParams::default() };
            assert!(validate(&raw).is_ok(), "years={years}");
        }
        for years in [0.0, 51.0, -3.0] {
            let raw = RawParams { years, ..RawParams::default() };
            assert!(validate(&raw).is_err(), "years={years}");
        }
    }

    #[test]
    fn test_fractional_years_rejected() {
        let raw = RawParams { years: 2.5, ..RawParams::default() };
        let errors = validate(&raw).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.field("years").unwrap().message.contains("whole number"));
    }

    #[test]
    fn test_display_joins_errors() {
        let raw = RawParams {
            initial_capital: -1.0,
            annual_fee: -1.0,
            ..RawParams::default()
        };
        let text = validate(&raw).unwrap_err().to_string();
        assert!(text.contains("initial_capital: must not be negative"));
        assert!(text.contains("; annual_fee:"));
    }
}
