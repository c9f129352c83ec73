//! Input validation for delivery estimation.
//!
//! Checks merchant-managed data before it reaches checkout. Detects:
//! - Cutoffs that are not a valid HHMM time
//! - Prescription lead times beyond a year
//! - Inverted transit ranges (`transit_min > transit_max`)
//! - Duplicate method names within a destination
//! - Methods without a name
//!
//! Validation is opt-in: the estimator never rejects input, so an
//! admin surface can report problems without blocking checkout.

use std::collections::HashSet;

use crate::models::{ShippingConfig, ShippingMethod, MAX_PRESCRIPTION_LEAD_TIME, NO_CUTOFF};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Cutoff minutes >= 60 or cutoff beyond 2400.
    InvalidCutoff,
    /// Prescription lead time above the accepted maximum.
    LeadTimeOutOfRange,
    /// `transit_min` exceeds `transit_max`.
    InvertedTransit,
    /// Two methods share a name for the same destination.
    DuplicateMethod,
    /// A method has an empty name.
    EmptyName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates shop configuration.
pub fn validate_config(config: &ShippingConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let cutoff = config.shipping_cutoff;
    if cutoff > NO_CUTOFF || cutoff % 100 >= 60 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCutoff,
            format!("Shipping cutoff {cutoff} is not a valid HHMM time"),
        ));
    }

    let lead = config.prescription_lead_time;
    if lead > MAX_PRESCRIPTION_LEAD_TIME {
        errors.push(ValidationError::new(
            ValidationErrorKind::LeadTimeOutOfRange,
            format!("Prescription lead time {lead} exceeds {MAX_PRESCRIPTION_LEAD_TIME} days"),
        ));
    }

    finish(errors)
}

/// Validates the shipping methods offered to one or more destinations.
///
/// Checks:
/// 1. Every method has a name
/// 2. `transit_min <= transit_max`
/// 3. No duplicate (name, ISO code) pairs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_methods(methods: &[ShippingMethod]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for method in methods {
        if method.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Shipping method for '{}' has no name", method.iso_code),
            ));
        }

        if method.transit_min > method.transit_max {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedTransit,
                format!(
                    "Method '{}' has transit_min {} > transit_max {}",
                    method.name, method.transit_min, method.transit_max
                ),
            ));
        }

        if !seen.insert((method.name.as_str(), method.iso_code.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateMethod,
                format!(
                    "Duplicate method '{}' for destination '{}'",
                    method.name, method.iso_code
                ),
            ));
        }
    }

    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_methods() -> Vec<ShippingMethod> {
        vec![
            ShippingMethod::new("DPD Next Day", 1, 1).with_iso_code("GB"),
            ShippingMethod::new("Royal Mail 48", 2, 3).with_iso_code("GB"),
            ShippingMethod::new("DPD Next Day", 2, 4).with_iso_code("FR"),
        ]
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&ShippingConfig::default()).is_ok());
        assert!(validate_config(&ShippingConfig::default().with_cutoff(1430)).is_ok());
        assert!(validate_config(&ShippingConfig::default().with_cutoff(0)).is_ok());
    }

    #[test]
    fn test_invalid_cutoff() {
        for cutoff in [1460, 2401, 9999] {
            let errors = validate_config(&ShippingConfig::default().with_cutoff(cutoff)).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::InvalidCutoff);
            assert!(errors[0].message.contains(&cutoff.to_string()));
        }
    }

    #[test]
    fn test_lead_time_out_of_range() {
        let config = ShippingConfig::default().with_prescription_lead_time(4_000_000_000);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::LeadTimeOutOfRange);

        let config = ShippingConfig::default().with_prescription_lead_time(MAX_PRESCRIPTION_LEAD_TIME);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_valid_methods() {
        assert!(validate_methods(&sample_methods()).is_ok());
        assert!(validate_methods(&[]).is_ok());
    }

    #[test]
    fn test_inverted_transit() {
        let methods = vec![ShippingMethod::new("Backwards", 3, 1).with_iso_code("GB")];
        let errors = validate_methods(&methods).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvertedTransit));
    }

    #[test]
    fn test_duplicate_method() {
        let mut methods = sample_methods();
        methods.push(ShippingMethod::new("Royal Mail 48", 1, 2).with_iso_code("GB"));

        let errors = validate_methods(&methods).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateMethod);
        assert!(errors[0].message.contains("Royal Mail 48"));
    }

    #[test]
    fn test_multiple_errors() {
        let methods = vec![
            ShippingMethod::new("", 1, 1),
            ShippingMethod::new("Slow", 5, 2),
        ];
        let errors = validate_methods(&methods).unwrap_err();
        assert!(errors.len() >= 2);
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyName));
    }
}
