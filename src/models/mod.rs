//! Set-cover domain models.
//!
//! Provides the core data types for representing cover problems and
//! their solutions. Domain-agnostic: the same types describe radio
//! stations covering states, sensors covering zones, or tests covering
//! code paths.
//!
//! # Domain Mappings
//!
//! | u-cover | Broadcasting | Monitoring | Testing |
//! |---------|--------------|------------|---------|
//! | Candidate | Station | Sensor | Test case |
//! | Target | State | Zone | Code path |
//! | Universe | Required states | Monitored area | Coverage goal |
//! | SearchResult | Station plan | Sensor layout | Test suite |

mod candidate;
mod problem;
mod result;

pub use candidate::Candidate;
pub use problem::CoverProblem;
pub use result::{SearchResult, SelectionStep};
