//! Growth-model fitting orchestration.
//!
//! Responsibilities:
//!
//! - fit each candidate class independently (parallel, pure math)
//! - score each surviving fit by mean squared error
//! - select the lowest-error candidate, or report "no fit found"

pub mod fitter;
pub mod selection;

pub use fitter::*;
pub use selection::*;
