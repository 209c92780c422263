//! Candidate growth-rate model implementations.
//!
//! Models are implemented as small, pure functions so that fitting/selection
//! code can stay generic over the candidate set.

pub mod model;

pub use model::*;
