//! Random-sampling comparator for the greedy driver.
//!
//! Draws fixed-size random subsets of the candidate pool and measures how
//! many required targets each subset leaves uncovered. The distribution of
//! those counts shows how far arbitrary local picks land from the greedy
//! cover.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_cover::models::{Candidate, CoverProblem};
//! use u_cover::sampling::{LocalSampler, SamplerConfig};
//!
//! let problem = CoverProblem::new(["a", "b", "c"])
//!     .with_candidate(Candidate::new("k1").with_targets(["a", "b"]))
//!     .with_candidate(Candidate::new("k2").with_targets(["c"]))
//!     .with_candidate(Candidate::new("k3").with_targets(["a"]));
//!
//! let sampler = LocalSampler::new(SamplerConfig::new(5, 2));
//! let mut rng = SmallRng::seed_from_u64(7);
//! let outcomes = sampler.run(&problem, &mut rng).unwrap();
//! assert_eq!(outcomes.len(), 5);
//! assert!(outcomes.iter().all(|&u| u <= 3));
//! ```

mod sampler;

pub use sampler::LocalSampler;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::CoverProblem;

/// Default number of independent trials.
pub const DEFAULT_TRIALS: usize = 40;
/// Default number of candidates drawn per trial.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Local sampler configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Number of independent trials.
    pub trials: usize,
    /// Distinct candidates drawn per trial.
    pub sample_size: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl SamplerConfig {
    /// Creates a configuration.
    pub fn new(trials: usize, sample_size: usize) -> Self {
        Self {
            trials,
            sample_size,
        }
    }

    /// Sets the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the per-trial sample size.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }
}

/// Runs the sampler with the thread-local generator (not reproducible).
pub fn local_search(
    problem: &CoverProblem,
    trials: usize,
    sample_size: usize,
) -> Result<Vec<usize>> {
    local_search_with_rng(problem, trials, sample_size, &mut rand::rng())
}

/// Runs the sampler with an injected random source.
pub fn local_search_with_rng<R: rand::Rng + ?Sized>(
    problem: &CoverProblem,
    trials: usize,
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    LocalSampler::new(SamplerConfig::new(trials, sample_size)).run(problem, rng)
}
