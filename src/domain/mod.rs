//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the candidate growth-rate classes (`ComplexityClass`)
//! - raw measurement sequences (`Measurements`)
//! - fit outputs (`CandidateFit`, `FitSelection`, `EstimationResult`)
//! - run configuration (`RunConfig`) and the export schema (`ResultsFile`)

pub mod types;

pub use types::*;
