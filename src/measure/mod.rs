//! Wall-clock timing of target callables.
//!
//! Pure measurement; no statistics. The fitter consumes the `(sizes, times)`
//! sequences this module produces.

pub mod harness;

pub use harness::*;
