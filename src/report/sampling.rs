//! Sampler outcome statistics and greedy comparison.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::CoverKpi;

/// Distribution of uncovered counts across sampler trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingSummary {
    /// Number of trials.
    pub trials: usize,
    /// Size of the target universe.
    pub universe_size: usize,
    /// Fewest uncovered targets in any trial. `None` when there were no trials.
    pub min_uncovered: Option<usize>,
    /// Most uncovered targets in any trial.
    pub max_uncovered: Option<usize>,
    /// Mean uncovered targets (0.0 when there were no trials).
    pub mean_uncovered: f64,
    /// Trials that covered the whole universe.
    pub full_cover_trials: usize,
    /// Uncovered count → number of trials.
    pub histogram: BTreeMap<usize, usize>,
}

impl SamplingSummary {
    /// Summarizes sampler outcomes.
    pub fn from_outcomes(outcomes: &[usize], universe_size: usize) -> Self {
        let mut histogram = BTreeMap::new();
        for &uncovered in outcomes {
            *histogram.entry(uncovered).or_insert(0) += 1;
        }

        let mean_uncovered = if outcomes.is_empty() {
            0.0
        } else {
            outcomes.iter().sum::<usize>() as f64 / outcomes.len() as f64
        };

        Self {
            trials: outcomes.len(),
            universe_size,
            min_uncovered: outcomes.iter().min().copied(),
            max_uncovered: outcomes.iter().max().copied(),
            mean_uncovered,
            full_cover_trials: histogram.get(&0).copied().unwrap_or(0),
            histogram,
        }
    }

    /// Fraction of trials that covered the universe (0.0 with no trials).
    pub fn full_cover_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.full_cover_trials as f64 / self.trials as f64
        }
    }
}

/// Greedy cover measured against sampled subsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Required targets the greedy cover leaves out.
    pub greedy_uncovered: usize,
    /// Candidates the greedy cover used.
    pub greedy_candidates: usize,
    /// Best sampled uncovered count.
    pub best_sampled_uncovered: Option<usize>,
    /// Mean sampled uncovered count.
    pub mean_sampled_uncovered: f64,
}

impl Comparison {
    /// Builds a comparison from greedy KPIs and a sampling summary.
    pub fn new(kpi: &CoverKpi, sampling: &SamplingSummary) -> Self {
        Self {
            greedy_uncovered: kpi.uncovered.len(),
            greedy_candidates: kpi.candidates_used,
            best_sampled_uncovered: sampling.min_uncovered,
            mean_sampled_uncovered: sampling.mean_uncovered,
        }
    }

    /// Whether greedy left no more targets uncovered than the best sample.
    pub fn greedy_at_least_as_good(&self) -> bool {
        self.best_sampled_uncovered
            .map_or(true, |best| self.greedy_uncovered <= best)
    }

    /// Mean sampled uncovered minus greedy uncovered.
    pub fn mean_gap(&self) -> f64 {
        self.mean_sampled_uncovered - self.greedy_uncovered as f64
    }
}
