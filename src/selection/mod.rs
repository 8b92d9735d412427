//! Marginal-gain candidate selection.
//!
//! Computes how many uncovered targets each candidate would add and picks
//! the candidate with the largest gain. This is the per-step rule shared
//! by the greedy driver and any caller that wants a single best pick.
//!
//! # Usage
//!
//! ```
//! use std::collections::BTreeSet;
//! use u_cover::models::Candidate;
//! use u_cover::selection::{CoverageIndex, TieBreaker};
//!
//! let pool = vec![
//!     Candidate::new("kone").with_targets(["wa", "id", "mt"]),
//!     Candidate::new("ktwo").with_targets(["or", "nv", "ca"]),
//! ];
//! let covered: BTreeSet<String> = ["wa".to_string()].into();
//!
//! let index = CoverageIndex::new().with_tie_breaker(TieBreaker::ById);
//! let best = index.select_best(&pool, &covered);
//! assert_eq!(best.candidate.as_deref(), Some("ktwo"));
//! assert_eq!(best.gain, 3);
//! ```
//!
//! # Reference
//! Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"

mod index;

pub use index::{CoverageIndex, TieBreaker};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::Candidate;

/// Outcome of a best-candidate query.
///
/// `candidate` is `None` only when the pool is empty; the gain is then 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestCandidate {
    /// Selected candidate ID.
    pub candidate: Option<String>,
    /// Marginal gain of the selected candidate.
    pub gain: usize,
}

impl BestCandidate {
    /// The "no candidate" sentinel.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether a candidate was found.
    pub fn is_some(&self) -> bool {
        self.candidate.is_some()
    }
}

/// Marginal gain of `candidate` w.r.t. `covered`: `|coverage \ covered|`.
#[inline]
pub fn marginal_gain(candidate: &Candidate, covered: &BTreeSet<String>) -> usize {
    candidate.gain_against(covered)
}

/// Selects the max-gain candidate with the default tie-breaker.
pub fn select_best(pool: &[Candidate], covered: &BTreeSet<String>) -> BestCandidate {
    CoverageIndex::new().select_best(pool, covered)
}
