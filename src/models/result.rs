//! Search result (solution) model.
//!
//! Records the ordered selection trace of a greedy run together with the
//! final covered set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Result of a greedy cover search.
///
/// The three sequences are parallel: entry `i` describes the `i`-th pick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Selected candidate IDs in decision order.
    pub selection: Vec<String>,
    /// Size of the covered set after each pick.
    pub cumulative_covered: Vec<usize>,
    /// Marginal gain of each pick.
    pub gains: Vec<usize>,
    /// Every target covered by the selection.
    pub final_covered: BTreeSet<String>,
}

/// One entry of the selection trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionStep<'a> {
    /// Selected candidate ID.
    pub candidate: &'a str,
    /// Newly covered targets contributed by this pick.
    pub gain: usize,
    /// Covered-set size after this pick.
    pub cumulative_covered: usize,
}

impl SearchResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pick to the trace.
    pub(crate) fn record(&mut self, candidate: impl Into<String>, gain: usize) {
        self.selection.push(candidate.into());
        self.gains.push(gain);
        self.cumulative_covered.push(self.final_covered.len());
    }

    /// Iterates the selection trace in decision order.
    pub fn steps(&self) -> impl Iterator<Item = SelectionStep<'_>> + '_ {
        self.selection
            .iter()
            .zip(&self.gains)
            .zip(&self.cumulative_covered)
            .map(|((candidate, &gain), &cumulative_covered)| SelectionStep {
                candidate,
                gain,
                cumulative_covered,
            })
    }

    /// Number of selected candidates.
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Whether the selection covers every target in `universe`.
    pub fn is_complete(&self, universe: &BTreeSet<String>) -> bool {
        universe.is_subset(&self.final_covered)
    }

    /// Required targets the selection leaves uncovered.
    pub fn uncovered(&self, universe: &BTreeSet<String>) -> BTreeSet<String> {
        universe.difference(&self.final_covered).cloned().collect()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "covered targets:    {:?}", self.final_covered)?;
        writeln!(f, "selection:          {:?}", self.selection)?;
        writeln!(f, "cumulative covered: {:?}", self.cumulative_covered)?;
        write!(f, "gains:              {:?}", self.gains)
    }
}
