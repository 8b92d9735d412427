//! Cover quality metrics.
//!
//! Summarizes greedy results and sampler outcomes for reporting. Nothing
//! here prints or plots; output collaborators render these values.
//!
//! # Metrics
//!
//! - `CoverKpi`: coverage rate, uncovered targets, redundant candidates.
//! - `SamplingSummary`: min/max/mean uncovered and a histogram of outcomes.
//! - `Comparison`: greedy cover against the best and mean sampled subset.

mod kpi;
mod sampling;

pub use kpi::CoverKpi;
pub use sampling::{Comparison, SamplingSummary};
