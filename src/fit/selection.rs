//! Candidate selection by mean squared error.
//!
//! Each candidate class in the supplied set is fitted independently; failed
//! candidates are excluded with a recorded reason. The winner is the
//! surviving candidate with the strictly smallest MSE. Exact ties go to the
//! earlier candidate in the set, so with the default ordering the
//! asymptotically smaller class wins deterministically.
//!
//! If every candidate fails, the selection carries no winner ("no fit
//! found") rather than an error: the caller's run continues for other
//! targets.

use log::debug;
use rayon::prelude::*;

use crate::domain::{CandidateFit, ComplexityClass, FitSelection, Measurements};
use crate::error::AppError;
use crate::fit::fitter::fit_candidate;

/// Fit every candidate in `candidates` against the measurements and select
/// the best one.
///
/// The candidate set is an explicit argument so tests can inject a reduced
/// set; the pipeline passes `models::CANDIDATES`.
pub fn select_best_fit(
    candidates: &[ComplexityClass],
    measurements: &Measurements,
) -> Result<FitSelection, AppError> {
    validate_measurements(measurements)?;

    // Evaluate each candidate independently (parallel; pure math after
    // measurement, so no timing contention).
    let outcomes: Vec<(ComplexityClass, Result<CandidateFit, String>)> = candidates
        .par_iter()
        .map(|&class| (class, fit_candidate(class, &measurements.sizes, &measurements.times)))
        .collect();

    let mut fits = Vec::new();
    let mut skipped = Vec::new();
    let mut best: Option<CandidateFit> = None;

    for (class, outcome) in outcomes {
        match outcome {
            Ok(fit) => {
                debug!(
                    "candidate {} coefficient={:.6e} mse={:.6e}",
                    class.display_name(),
                    fit.coefficient,
                    fit.mse
                );
                // Strict `<` keeps the earlier candidate on exact ties.
                if best.map_or(true, |b| fit.mse < b.mse) {
                    best = Some(fit);
                }
                fits.push(fit);
            }
            Err(reason) => {
                debug!("candidate {} skipped: {reason}", class.display_name());
                skipped.push((class, reason));
            }
        }
    }

    Ok(FitSelection {
        best,
        fits,
        skipped,
    })
}

fn validate_measurements(m: &Measurements) -> Result<(), AppError> {
    if m.sizes.len() != m.times.len() {
        return Err(AppError::new(
            4,
            format!(
                "Size/time length mismatch: {} sizes vs {} times.",
                m.sizes.len(),
                m.times.len()
            ),
        ));
    }
    if m.len() < 2 {
        return Err(AppError::new(
            3,
            format!("Need at least 2 measurements to fit, got {}.", m.len()),
        ));
    }
    if let Some(&bad) = m.sizes.iter().find(|&&n| n == 0) {
        return Err(AppError::new(
            3,
            format!("Measured sizes must be >= 1, got {bad}."),
        ));
    }

    let mut distinct: Vec<u64> = m.sizes.clone();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() < 2 {
        return Err(AppError::new(
            3,
            "Need at least 2 distinct sizes to fit (single-point regression is degenerate).",
        ));
    }

    Ok(())
}
