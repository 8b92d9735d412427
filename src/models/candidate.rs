//! Candidate model.
//!
//! A candidate is one selectable unit (a station, a sensor, a test case)
//! together with the set of targets it covers.
//!
//! # Reference
//! Vazirani (2001), "Approximation Algorithms", Ch. 2 (Set Cover)

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A selectable candidate and its coverage set.
///
/// Coverage is stored as an ordered set, so duplicate targets supplied
/// through the builders or a deserialized sequence collapse to one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique candidate identifier.
    pub id: String,
    /// Targets this candidate covers.
    pub coverage: BTreeSet<String>,
}

impl Candidate {
    /// Creates a candidate with an empty coverage set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            coverage: BTreeSet::new(),
        }
    }

    /// Adds a single covered target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.coverage.insert(target.into());
        self
    }

    /// Adds several covered targets.
    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.coverage.extend(targets.into_iter().map(Into::into));
        self
    }

    /// Number of targets in the coverage set.
    pub fn coverage_size(&self) -> usize {
        self.coverage.len()
    }

    /// Whether this candidate covers the given target.
    pub fn covers(&self, target: &str) -> bool {
        self.coverage.contains(target)
    }

    /// Marginal gain against an already-covered set: `|coverage \ covered|`.
    pub fn gain_against(&self, covered: &BTreeSet<String>) -> usize {
        self.coverage.difference(covered).count()
    }
}
