//! Set-cover framework for the U-Engine ecosystem.
//!
//! Selects a small set of candidates whose combined coverage satisfies a
//! target universe, using the greedy marginal-gain heuristic, and compares
//! it with random fixed-size samples of the candidate pool.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Candidate`, `CoverProblem`, `SearchResult`
//! - **`validation`**: Input integrity checks (duplicate IDs, blank IDs/targets)
//! - **`selection`**: Marginal-gain evaluation and best-candidate selection
//! - **`greedy`**: Greedy cover driver with selection trace
//! - **`sampling`**: Random-subset comparator with an injectable RNG
//! - **`report`**: Coverage KPIs and sampler statistics
//!
//! # Example
//!
//! ```
//! use u_cover::greedy::greedy_search;
//! use u_cover::models::CoverProblem;
//!
//! let problem = CoverProblem::from_mapping(
//!     [
//!         ("kone", vec!["id", "nv", "ut"]),
//!         ("ktwo", vec!["wa", "id", "mt"]),
//!         ("kthree", vec!["or", "nv", "ca"]),
//!         ("kfour", vec!["nv", "ut"]),
//!         ("kfive", vec!["ca", "az"]),
//!     ],
//!     ["id", "nv", "ut", "mt", "wa", "or", "ca", "az"],
//! );
//!
//! let result = greedy_search(&problem).unwrap();
//! assert!(result.is_complete(&problem.universe));
//! assert!(!result.selection.contains(&"kfour".to_string()));
//! ```
//!
//! # References
//!
//! - Johnson (1974), "Approximation Algorithms for Combinatorial Problems"
//! - Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"
//! - Vazirani (2001), "Approximation Algorithms", Ch. 2

pub mod error;
pub mod greedy;
pub mod models;
pub mod report;
pub mod sampling;
pub mod selection;
pub mod validation;

pub use error::{CoverError, Result};
