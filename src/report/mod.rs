//! Formatted terminal output for a run.
//!
//! We keep formatting code in one place so:
//! - the measurement/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;
