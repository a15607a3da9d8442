//! Input validation for bed simulations.
//!
//! Checks patient records before any ordering or simulation work is done.
//! Detects:
//! - Duplicate patient IDs
//! - Non-positive hospitalization durations
//! - Negative arrival times
//! - Negative survival windows
//!
//! All problems are collected so a caller can report them together.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::PatientRecord;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending patient.
    pub patient_id: u32,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two patients share the same ID.
    DuplicateId,
    /// Hospitalization duration is zero or negative.
    NonPositiveDuration,
    /// Arrival time is negative.
    NegativeArrival,
    /// Survival window is negative.
    NegativeSurvivalWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, patient_id: u32, message: impl Into<String>) -> Self {
        Self {
            kind,
            patient_id,
            message: message.into(),
        }
    }
}

/// Validates patient records.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues in
/// input order.
pub fn validate_patients(patients: &[PatientRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for p in patients {
        if !seen.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                p.id,
                format!("Duplicate patient ID: {}", p.id),
            ));
        }

        if p.hospitalization_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                p.id,
                format!(
                    "Patient {} has non-positive hospitalization duration {}",
                    p.id, p.hospitalization_duration
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                p.id,
                format!("Patient {} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.survival_window < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeSurvivalWindow,
                p.id,
                format!(
                    "Patient {} has negative survival window {}",
                    p.id, p.survival_window
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
