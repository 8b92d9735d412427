//! Coverage index for marginal-gain evaluation.
//!
//! Scores a pool of candidates against a covered set and resolves ties
//! with a configurable strategy.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::BestCandidate;
use crate::models::Candidate;

/// How ties between equal-gain candidates are broken.
///
/// Callers should only rely on the pick being one of the max-gain
/// candidates; both strategies are deterministic for a given pool order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreaker {
    /// First max-gain candidate in pool order (default).
    #[default]
    FirstEncountered,
    /// Lexicographically smallest candidate ID.
    ById,
}

/// Evaluates marginal gains over a candidate pool.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use u_cover::models::Candidate;
/// use u_cover::selection::CoverageIndex;
///
/// let pool = vec![
///     Candidate::new("a").with_targets(["x", "y"]),
///     Candidate::new("b").with_targets(["y"]),
/// ];
/// let index = CoverageIndex::new();
/// assert_eq!(index.gains(&pool, &BTreeSet::new()), vec![2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageIndex {
    tie_breaker: TieBreaker,
}

impl CoverageIndex {
    /// Creates an index with the default tie-breaker.
    pub fn new() -> Self {
        Self {
            tie_breaker: TieBreaker::FirstEncountered,
        }
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// The configured tie-breaker.
    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Marginal gain of every pool entry, in pool order.
    pub fn gains(&self, pool: &[Candidate], covered: &BTreeSet<String>) -> Vec<usize> {
        pool.iter().map(|c| c.gain_against(covered)).collect()
    }

    /// Returns `(index, gain)` of the best candidate, or `None` for an empty pool.
    pub fn select_best_index(
        &self,
        pool: &[Candidate],
        covered: &BTreeSet<String>,
    ) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize)> = None;

        for (i, candidate) in pool.iter().enumerate() {
            let gain = candidate.gain_against(covered);
            let better = match best {
                None => true,
                Some((best_idx, best_gain)) => {
                    gain > best_gain
                        || (gain == best_gain && self.prefers(candidate, &pool[best_idx]))
                }
            };
            if better {
                best = Some((i, gain));
            }
        }

        best
    }

    /// Returns the best candidate, or the [`BestCandidate::none`] sentinel.
    pub fn select_best(&self, pool: &[Candidate], covered: &BTreeSet<String>) -> BestCandidate {
        match self.select_best_index(pool, covered) {
            Some((idx, gain)) => BestCandidate {
                candidate: Some(pool[idx].id.clone()),
                gain,
            },
            None => BestCandidate::none(),
        }
    }

    // Whether `challenger` beats `incumbent` on an exact gain tie.
    fn prefers(&self, challenger: &Candidate, incumbent: &Candidate) -> bool {
        match self.tie_breaker {
            TieBreaker::FirstEncountered => false,
            TieBreaker::ById => challenger.id < incumbent.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_pool() -> Vec<Candidate> {
        vec![
            Candidate::new("kone").with_targets(["id", "nv", "ut"]),
            Candidate::new("ktwo").with_targets(["wa", "id", "mt"]),
            Candidate::new("kthree").with_targets(["or", "nv", "ca"]),
            Candidate::new("kfour").with_targets(["nv", "ut"]),
        ]
    }

    #[test]
    fn test_gains_in_pool_order() {
        let index = CoverageIndex::new();
        let gains = index.gains(&sample_pool(), &set(&["id", "nv"]));
        assert_eq!(gains, vec![1, 2, 2, 1]);
    }

    #[test]
    fn test_first_encountered_tie_breaker() {
        let index = CoverageIndex::new();
        assert_eq!(index.select_best_index(&sample_pool(), &set(&[])), Some((0, 3)));

        let best = index.select_best(&sample_pool(), &set(&["id", "nv"]));
        assert_eq!(best.candidate.as_deref(), Some("ktwo"));
        assert_eq!(best.gain, 2);
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let index = CoverageIndex::new().with_tie_breaker(TieBreaker::ById);
        // kone, ktwo, kthree all gain 3; "kone" < "kthree" < "ktwo"
        let best = index.select_best(&sample_pool(), &set(&[]));
        assert_eq!(best.candidate.as_deref(), Some("kone"));

        // ktwo and kthree tie at 2; "kthree" < "ktwo"
        let best = index.select_best(&sample_pool(), &set(&["id", "nv"]));
        assert_eq!(best.candidate.as_deref(), Some("kthree"));
    }

    #[test]
    fn test_strict_max_beats_tie_breaker() {
        let pool = vec![
            Candidate::new("a").with_target("x"),
            Candidate::new("z").with_targets(["x", "y"]),
        ];
        let index = CoverageIndex::new().with_tie_breaker(TieBreaker::ById);
        assert_eq!(index.select_best_index(&pool, &set(&[])), Some((1, 2)));
    }

    #[test]
    fn test_all_zero_gain_still_returns_candidate() {
        let index = CoverageIndex::new();
        let covered = set(&["id", "nv", "ut", "wa", "mt", "or", "ca"]);
        let best = index.select_best(&sample_pool(), &covered);
        assert_eq!(best.candidate.as_deref(), Some("kone"));
        assert_eq!(best.gain, 0);
    }

    #[test]
    fn test_idempotent_gain() {
        let index = CoverageIndex::new();
        let covered = set(&["wa"]);
        let first = index.select_best(&sample_pool(), &covered);
        let second = index.select_best(&sample_pool(), &covered);
        assert_eq!(first.gain, second.gain);
    }

    #[test]
    fn test_empty_pool() {
        let index = CoverageIndex::new();
        assert!(index.select_best_index(&[], &set(&["a"])).is_none());
        assert_eq!(index.select_best(&[], &set(&[])), BestCandidate::none());
    }
}
