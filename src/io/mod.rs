//! Input/output helpers.
//!
//! - results JSON read/write (`results`)

pub mod results;

pub use results::*;
