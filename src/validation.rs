//! Input validation for cover problems.
//!
//! Checks structural integrity of the candidate mapping before searching.
//! Detects:
//! - Duplicate candidate IDs (a mapping cannot hold the same key twice)
//! - Blank candidate IDs
//! - Blank target IDs in coverage sets or the universe
//!
//! Targets outside the universe are allowed. They are covered like any
//! other target but never make the universe more complete.

use crate::models::CoverProblem;
use std::collections::HashSet;
use std::fmt;

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
    /// Two candidates share the same ID.
    DuplicateId,
    /// A candidate has a blank ID.
    EmptyId,
    /// A coverage set or the universe contains a blank target.
    EmptyTarget,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a cover problem.
///
/// Checks:
/// 1. No duplicate candidate IDs
/// 2. No blank candidate IDs
/// 3. No blank targets in any coverage set
/// 4. No blank targets in the universe
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &CoverProblem) -> ValidationResult {
    let mut errors = Vec::new();

    let mut candidate_ids = HashSet::new();
    for candidate in &problem.candidates {
        if candidate.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Candidate with blank ID",
            ));
        } else if !candidate_ids.insert(candidate.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate candidate ID: {}", candidate.id),
            ));
        }

        if candidate.coverage.iter().any(|t| t.trim().is_empty()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTarget,
                format!("Candidate '{}' covers a blank target", candidate.id),
            ));
        }
    }

    if problem.universe.iter().any(|t| t.trim().is_empty()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTarget,
            "Universe contains a blank target",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
