//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during measurement and fitting
//! - exported to JSON
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Input sizes used when the caller does not supply `--sizes`.
pub const DEFAULT_SIZES: [u64; 5] = [10, 100, 500, 1000, 2000];

/// Label reported when every candidate model failed to fit.
pub const NO_FIT_LABEL: &str = "no fit found";

/// One member of the fixed family of canonical growth-rate shapes.
///
/// Each class is a one-coefficient model `time ≈ a · g(n)`; the basis `g` is
/// implemented in `models::basis_value`. The declaration order here is the
/// asymptotic order, smallest first, and doubles as the tie-break order during
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityClass {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
    Exponential,
}

impl ComplexityClass {
    /// Human-readable big-O label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ComplexityClass::Constant => "O(1)",
            ComplexityClass::Logarithmic => "O(log n)",
            ComplexityClass::Linear => "O(n)",
            ComplexityClass::Linearithmic => "O(n log n)",
            ComplexityClass::Quadratic => "O(n^2)",
            ComplexityClass::Cubic => "O(n^3)",
            ComplexityClass::Exponential => "O(2^n)",
        }
    }
}

/// One timing run for a single target: `times[i]` is the wall-clock seconds
/// observed for the instance of size `sizes[i]`.
///
/// Order is caller-significant: sizes are echoed in the order they were
/// requested, never sorted or deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurements {
    pub sizes: Vec<u64>,
    pub times: Vec<f64>,
}

impl Measurements {
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// A successfully fitted candidate: its class, the least-squares coefficient,
/// and the mean squared error against the observed times.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CandidateFit {
    pub class: ComplexityClass,
    pub coefficient: f64,
    pub mse: f64,
}

/// Output of fitting + selection for one measurement sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitSelection {
    /// Winning candidate, or `None` when every candidate failed to fit.
    pub best: Option<CandidateFit>,
    /// Fits for all candidates that survived fitting.
    pub fits: Vec<CandidateFit>,
    /// Candidates that were skipped and why (for diagnostics).
    pub skipped: Vec<(ComplexityClass, String)>,
}

impl FitSelection {
    /// Label of the winning class, or the no-fit sentinel.
    pub fn best_label(&self) -> &'static str {
        match &self.best {
            Some(fit) => fit.class.display_name(),
            None => NO_FIT_LABEL,
        }
    }
}

/// Full estimation output for one named target.
///
/// Carries everything a reporting or plotting layer needs: the name, the raw
/// (size, time) series in request order, and the selection diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationResult {
    pub name: String,
    pub measurements: Measurements,
    pub selection: FitSelection,
}

impl EstimationResult {
    pub fn best_label(&self) -> &'static str {
        self.selection.best_label()
    }
}

/// A target whose estimation failed fatally (panic or timeout). Failures are
/// recorded per target so the rest of the run is unaffected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFailure {
    pub name: String,
    pub reason: String,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Workload names to estimate, in order. Empty means the default set.
    pub workloads: Vec<String>,
    /// Input sizes, in caller order.
    pub sizes: Vec<u64>,
    /// Optional per-invocation timeout for the target.
    pub timeout: Option<Duration>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export: Option<PathBuf>,
}

/// Validate an input size list at the configuration boundary.
///
/// The fitter needs at least two distinct sizes (regression against a single
/// point is degenerate) and every size must be >= 1 (the logarithmic and
/// linearithmic bases are undefined at 0). Ordering and duplicates beyond
/// that are deliberately not enforced.
pub fn validate_sizes(sizes: &[u64]) -> Result<(), AppError> {
    if sizes.len() < 2 {
        return Err(AppError::config(format!(
            "Need at least 2 input sizes, got {}.",
            sizes.len()
        )));
    }
    if let Some(&bad) = sizes.iter().find(|&&n| n == 0) {
        return Err(AppError::config(format!(
            "Input sizes must be >= 1, got {bad}."
        )));
    }

    let mut distinct: Vec<u64> = sizes.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() < 2 {
        return Err(AppError::config(format!(
            "Need at least 2 distinct input sizes, got only {}.",
            sizes[0]
        )));
    }

    Ok(())
}

/// A saved results file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsFile {
    pub tool: String,
    pub created_utc: DateTime<Utc>,
    pub sizes: Vec<u64>,
    pub results: Vec<EstimationResult>,
    pub failures: Vec<RunFailure>,
}
