//! Greedy cover quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Candidates Used | Number of picks |
//! | Covered | Required targets in the final covered set |
//! | Uncovered | Required targets left out |
//! | Coverage Rate | covered / universe size |
//! | Redundant | Candidates never picked |

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{CoverProblem, SearchResult};

/// Greedy cover performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverKpi {
    /// Number of selected candidates.
    pub candidates_used: usize,
    /// Size of the target universe.
    pub universe_size: usize,
    /// Required targets covered by the selection.
    pub covered_count: usize,
    /// Required targets left uncovered.
    pub uncovered: BTreeSet<String>,
    /// Fraction of required targets covered (0.0..1.0).
    pub coverage_rate: f64,
    /// Candidates that were never selected, in pool order.
    pub redundant: Vec<String>,
}

impl CoverKpi {
    /// Computes KPIs from a result and the problem it solved.
    pub fn calculate(problem: &CoverProblem, result: &SearchResult) -> Self {
        let uncovered = result.uncovered(&problem.universe);
        let universe_size = problem.universe_size();
        let covered_count = universe_size - uncovered.len();

        let coverage_rate = if universe_size == 0 {
            1.0
        } else {
            covered_count as f64 / universe_size as f64
        };

        let selected: BTreeSet<&str> = result.selection.iter().map(String::as_str).collect();
        let redundant = problem
            .candidates
            .iter()
            .filter(|c| !selected.contains(c.id.as_str()))
            .map(|c| c.id.clone())
            .collect();

        Self {
            candidates_used: result.len(),
            universe_size,
            covered_count,
            uncovered,
            coverage_rate,
            redundant,
        }
    }

    /// Whether every required target is covered.
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }

    /// Whether the cover meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_candidates: usize, min_coverage_rate: f64) -> bool {
        self.candidates_used <= max_candidates && self.coverage_rate >= min_coverage_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greedy::greedy_search;
    use crate::models::Candidate;

    fn western_problem() -> CoverProblem {
        CoverProblem::from_mapping(
            [
                ("kone", vec!["id", "nv", "ut"]),
                ("ktwo", vec!["wa", "id", "mt"]),
                ("kthree", vec!["or", "nv", "ca"]),
                ("kfour", vec!["nv", "ut"]),
                ("kfive", vec!["ca", "az"]),
            ],
            ["id", "nv", "ut", "mt", "wa", "or", "ca", "az"],
        )
    }

    #[test]
    fn test_kpi_complete_cover() {
        let problem = western_problem();
        let result = greedy_search(&problem).unwrap();

        let kpi = CoverKpi::calculate(&problem, &result);
        assert_eq!(kpi.candidates_used, 4);
        assert_eq!(kpi.covered_count, 8);
        assert!(kpi.is_complete());
        assert!((kpi.coverage_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.redundant, vec!["kfour"]);
    }

    #[test]
    fn test_kpi_partial_cover() {
        let problem = CoverProblem::new(["a", "b", "c", "d"])
            .with_candidate(Candidate::new("k1").with_targets(["a", "b"]))
            .with_candidate(Candidate::new("k2").with_targets(["c"]));
        let result = greedy_search(&problem).unwrap();

        let kpi = CoverKpi::calculate(&problem, &result);
        assert_eq!(kpi.covered_count, 3);
        assert_eq!(kpi.uncovered, BTreeSet::from(["d".to_string()]));
        assert!((kpi.coverage_rate - 0.75).abs() < 1e-10);
        assert!(kpi.redundant.is_empty());
    }

    #[test]
    fn test_kpi_ignores_out_of_universe_targets() {
        let problem = CoverProblem::new(["a"])
            .with_candidate(Candidate::new("k1").with_targets(["a", "x", "y"]));
        let result = greedy_search(&problem).unwrap();

        let kpi = CoverKpi::calculate(&problem, &result);
        assert_eq!(kpi.covered_count, 1);
        assert!((kpi.coverage_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let problem = CoverProblem::default();
        let kpi = CoverKpi::calculate(&problem, &SearchResult::new());
        assert_eq!(kpi.candidates_used, 0);
        assert!(kpi.is_complete());
        assert!((kpi.coverage_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let problem = western_problem();
        let result = greedy_search(&problem).unwrap();
        let kpi = CoverKpi::calculate(&problem, &result);

        assert!(kpi.meets_thresholds(4, 1.0));
        assert!(!kpi.meets_thresholds(3, 1.0));
        assert!(!kpi.meets_thresholds(10, 1.5));
    }
}
