//! Local sampler.
//!
//! Each trial draws `sample_size` distinct candidates without replacement,
//! unions their coverage, and records `|universe \ union|`. Trials share
//! nothing but the random source; the candidate pool is only borrowed.

use std::collections::BTreeSet;

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::{debug, info};

use super::SamplerConfig;
use crate::error::{CoverError, Result};
use crate::models::{Candidate, CoverProblem};

/// Randomized comparator over fixed-size candidate subsets.
#[derive(Debug, Clone, Default)]
pub struct LocalSampler {
    config: SamplerConfig,
}

impl LocalSampler {
    /// Creates a sampler.
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Runs every trial and returns the uncovered count of each, in trial order.
    ///
    /// # Errors
    /// [`CoverError::SampleTooLarge`] if `sample_size` exceeds the pool. The
    /// check runs before any trial, so no partial result is produced.
    pub fn run<R: Rng + ?Sized>(&self, problem: &CoverProblem, rng: &mut R) -> Result<Vec<usize>> {
        let pool_size = problem.candidate_count();
        if self.config.sample_size > pool_size {
            return Err(CoverError::SampleTooLarge {
                sample_size: self.config.sample_size,
                pool_size,
            });
        }

        let outcomes: Vec<usize> = (0..self.config.trials)
            .map(|trial| {
                let uncovered = self.run_trial(problem, rng);
                debug!(trial, uncovered, "local sample");
                uncovered
            })
            .collect();

        info!(
            trials = outcomes.len(),
            best = outcomes.iter().min().copied(),
            "local sampling finished"
        );

        Ok(outcomes)
    }

    // One trial; `run` has already checked the sample size against the pool.
    fn run_trial<R: Rng + ?Sized>(&self, problem: &CoverProblem, rng: &mut R) -> usize {
        let covered: BTreeSet<&str> = problem
            .candidates
            .choose_multiple(rng, self.config.sample_size)
            .flat_map(|c: &Candidate| c.coverage.iter().map(String::as_str))
            .collect();

        problem
            .universe
            .iter()
            .filter(|t| !covered.contains(t.as_str()))
            .count()
    }
}
