//! Greedy set-cover driver.
//!
//! # Algorithm
//!
//! `GreedySearch` repeatedly picks the remaining candidate with the largest
//! marginal gain until the universe is covered. It is not optimal, but is
//! a ln(n)-approximation of the minimum cover and runs in polynomial time.
//!
//! # Termination
//!
//! Each iteration either removes one candidate from the working pool or
//! exits, so a run makes at most `|candidates|` picks. Running out of
//! candidates before the universe is covered is a normal return; compare
//! [`SearchResult::final_covered`] with the universe to detect it.
//!
//! # References
//!
//! - Johnson (1974), "Approximation Algorithms for Combinatorial Problems"
//! - Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"
//!
//! [`SearchResult::final_covered`]: crate::models::SearchResult

mod driver;

pub use driver::GreedySearch;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{CoverProblem, SearchResult};
use crate::selection::TieBreaker;

/// Greedy driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedyConfig {
    /// Tie-breaking strategy for equal-gain candidates.
    pub tie_breaker: TieBreaker,
    /// Stop once the best remaining candidate adds nothing.
    ///
    /// Off by default: zero-gain candidates keep being picked until the
    /// pool is exhausted or the universe is covered.
    pub stop_on_zero_gain: bool,
    /// Upper bound on the number of picks. `None` = unbounded.
    pub max_selections: Option<usize>,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            tie_breaker: TieBreaker::FirstEncountered,
            stop_on_zero_gain: false,
            max_selections: None,
        }
    }
}

impl GreedyConfig {
    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sets whether zero-gain picks end the search.
    pub fn with_stop_on_zero_gain(mut self, stop: bool) -> Self {
        self.stop_on_zero_gain = stop;
        self
    }

    /// Caps the number of picks.
    pub fn with_max_selections(mut self, max: usize) -> Self {
        self.max_selections = Some(max);
        self
    }
}

/// Runs a greedy search with the default configuration.
pub fn greedy_search(problem: &CoverProblem) -> Result<SearchResult> {
    GreedySearch::new().search(problem)
}
