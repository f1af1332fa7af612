//! Roster validation.
//!
//! Checks the staff list before a planning session starts. Detects:
//! - Duplicate or empty person IDs
//! - Quality ratings outside 1..=5
//! - Zero contracted weekly hours
//!
//! All problems are collected; validation does not stop at the first one.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{Person, MAX_RATING, MIN_RATING};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two people share the same ID.
    DuplicateId,
    /// A person has an empty ID.
    EmptyId,
    /// Rating outside the allowed range.
    RatingOutOfRange,
    /// Contracted weekly hours are zero.
    NonPositiveHours,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a staff list.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(people: &[Person]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in people {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Person '{}' has an empty ID", p.name),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate person ID: {}", p.id),
            ));
        }

        if !(MIN_RATING..=MAX_RATING).contains(&p.rating) {
            errors.push(ValidationError::new(
                ValidationErrorKind::RatingOutOfRange,
                format!(
                    "Person '{}' has rating {} (expected {MIN_RATING}..={MAX_RATING})",
                    p.id, p.rating
                ),
            ));
        }

        if p.weekly_hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveHours,
                format!("Person '{}' has no contracted hours", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Roster;

    #[test]
    fn test_sample_roster_is_valid() {
        assert!(validate_roster(Roster::sample().people()).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let people = vec![Person::nurse("E1"), Person::physician("E1")];
        let errors = validate_roster(&people).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("E1"));
    }

    #[test]
    fn test_empty_id() {
        let people = vec![Person::nurse("  ").with_name("Nobody")];
        let errors = validate_roster(&people).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_rating_bounds() {
        let people = vec![
            Person::nurse("E1").with_rating(0),
            Person::nurse("E2").with_rating(6),
            Person::nurse("E3").with_rating(1),
            Person::nurse("E4").with_rating(5),
        ];
        let errors = validate_roster(&people).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::RatingOutOfRange));
    }

    #[test]
    fn test_zero_hours() {
        let people = vec![Person::physician("D1").with_weekly_hours(0)];
        let errors = validate_roster(&people).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveHours);
    }

    #[test]
    fn test_multiple_errors() {
        let people = vec![
            Person::nurse("E1").with_rating(9).with_weekly_hours(0),
            Person::nurse("E1"),
        ];
        let errors = validate_roster(&people).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
