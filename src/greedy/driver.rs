//! Greedy cover driver.
//!
//! # Algorithm
//!
//! 1. Validate the problem and copy its candidates into a working pool.
//! 2. While some required target is uncovered, pick the max-gain candidate.
//! 3. Remove the pick from the pool and union its coverage.
//! 4. Record the pick, its gain and the covered-set size.
//!
//! # Complexity
//! O(k * n * c) where k=picks, n=candidates, c=coverage set size.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use super::GreedyConfig;
use crate::error::Result;
use crate::models::{Candidate, CoverProblem, SearchResult};
use crate::selection::CoverageIndex;
use crate::validation::validate_problem;

/// Greedy set-cover search.
///
/// # Example
///
/// ```
/// use u_cover::greedy::GreedySearch;
/// use u_cover::models::{Candidate, CoverProblem};
///
/// let problem = CoverProblem::new(["a", "b", "c"])
///     .with_candidate(Candidate::new("k1").with_targets(["a", "b"]))
///     .with_candidate(Candidate::new("k2").with_targets(["b"]))
///     .with_candidate(Candidate::new("k3").with_targets(["c"]));
///
/// let result = GreedySearch::new().search(&problem).unwrap();
/// assert_eq!(result.selection, vec!["k1", "k3"]);
/// assert_eq!(result.gains, vec![2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedySearch {
    config: GreedyConfig,
}

impl GreedySearch {
    /// Creates a search with the default configuration.
    pub fn new() -> Self {
        Self {
            config: GreedyConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: GreedyConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &GreedyConfig {
        &self.config
    }

    /// Searches for a cover of `problem.universe`.
    ///
    /// The caller's problem is never mutated. Returns
    /// [`CoverError::InvalidProblem`](crate::error::CoverError) if the
    /// candidate mapping is malformed.
    pub fn search(&self, problem: &CoverProblem) -> Result<SearchResult> {
        validate_problem(problem)?;

        let index = CoverageIndex::new().with_tie_breaker(self.config.tie_breaker);
        let mut remaining: Vec<Candidate> = problem.candidates.clone();
        let mut result = SearchResult::new();

        while !problem.universe.is_subset(&result.final_covered) {
            if self
                .config
                .max_selections
                .is_some_and(|max| result.len() >= max)
            {
                debug!(picks = result.len(), "selection budget reached");
                break;
            }

            let Some((idx, gain)) = index.select_best_index(&remaining, &result.final_covered)
            else {
                debug!("candidate pool exhausted");
                break;
            };

            if gain == 0 && self.config.stop_on_zero_gain {
                debug!(candidate = %remaining[idx].id, "no remaining candidate adds coverage");
                break;
            }

            // `remove` keeps pool order stable for first-encountered ties.
            let chosen = remaining.remove(idx);
            union_into(&mut result.final_covered, chosen.coverage);
            debug!(
                candidate = %chosen.id,
                gain,
                covered = result.final_covered.len(),
                "greedy pick"
            );
            result.record(chosen.id, gain);
        }

        if result.is_complete(&problem.universe) {
            info!(
                picks = result.len(),
                covered = result.final_covered.len(),
                "greedy search covered universe"
            );
        } else {
            warn!(
                picks = result.len(),
                uncovered = result.uncovered(&problem.universe).len(),
                "greedy search ended without full cover"
            );
        }

        Ok(result)
    }
}

fn union_into(covered: &mut BTreeSet<String>, coverage: BTreeSet<String>) {
    if covered.is_empty() {
        *covered = coverage;
    } else {
        covered.extend(coverage);
    }
}
