//! Cover problem (input) model.
//!
//! Bundles the candidate pool with the target universe that a search
//! must cover. The problem is passed explicitly to every search so
//! engines never depend on process-wide data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Candidate;

/// A set-cover problem instance.
///
/// # Candidate Order
/// Candidates keep insertion order. That order is the stable iteration
/// order used when equal-gain candidates are resolved by
/// [`TieBreaker::FirstEncountered`](crate::selection::TieBreaker).
///
/// # Precondition
/// Gains are computed against each candidate's full coverage set. Callers
/// whose coverage sets reach outside the universe and who want gains to
/// count only required targets should use [`CoverProblem::restricted_to_universe`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverProblem {
    /// Candidate pool, in insertion order.
    pub candidates: Vec<Candidate>,
    /// Targets that must be covered.
    pub universe: BTreeSet<String>,
}

impl CoverProblem {
    /// Creates a problem with the given universe and no candidates.
    pub fn new<I, S>(universe: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: Vec::new(),
            universe: universe.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a problem from a `candidate → targets` mapping.
    ///
    /// Iteration order of `mapping` becomes the candidate order.
    pub fn from_mapping<M, K, T, S, U, V>(mapping: M, universe: U) -> Self
    where
        M: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
        U: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut problem = Self::new(universe);
        for (id, targets) in mapping {
            problem
                .candidates
                .push(Candidate::new(id).with_targets(targets));
        }
        problem
    }

    /// Adds a candidate.
    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Finds a candidate by ID.
    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// Number of candidates in the pool.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Number of required targets.
    pub fn universe_size(&self) -> usize {
        self.universe.len()
    }

    /// Union of every candidate's coverage.
    pub fn coverable_targets(&self) -> BTreeSet<String> {
        self.candidates
            .iter()
            .flat_map(|c| c.coverage.iter().cloned())
            .collect()
    }

    /// Whether selecting every candidate would cover the universe.
    pub fn is_coverable(&self) -> bool {
        self.universe.is_subset(&self.coverable_targets())
    }

    /// Returns a copy whose coverage sets are intersected with the universe.
    pub fn restricted_to_universe(&self) -> Self {
        let candidates = self
            .candidates
            .iter()
            .map(|c| Candidate {
                id: c.id.clone(),
                coverage: c.coverage.intersection(&self.universe).cloned().collect(),
            })
            .collect();

        Self {
            candidates,
            universe: self.universe.clone(),
        }
    }
}
