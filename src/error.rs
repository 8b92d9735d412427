//! Error types for cover searches.
//!
//! Every variant is an invalid-argument error: searches have no transient
//! failure modes. An incomplete cover is a normal result, not an error.

use crate::validation::ValidationError;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CoverError>;

/// Errors raised by cover searches.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoverError {
    /// The local sampler was asked for more candidates than the pool holds.
    #[error("sample size {sample_size} exceeds candidate pool of {pool_size}")]
    SampleTooLarge { sample_size: usize, pool_size: usize },

    /// The problem failed boundary validation.
    #[error("invalid cover problem: {}", join_errors(.errors))]
    InvalidProblem { errors: Vec<ValidationError> },
}

impl From<Vec<ValidationError>> for CoverError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidProblem { errors }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
