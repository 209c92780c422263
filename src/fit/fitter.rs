//! Low-level fitting of a single candidate class.
//!
//! Given observed `(sizes, times)` pairs and a candidate class, we solve a
//! one-column least-squares problem for the coefficient `a` in
//! `time ≈ a · g(n)` and score the fit by mean squared error.
//!
//! Any numerical problem — a non-finite basis value (the exponential basis
//! overflows for large sizes), a failed solve, a non-finite error score —
//! rejects the candidate with a reason instead of failing the whole run. The
//! candidate is excluded from selection, never treated as infinitely bad.

use nalgebra::{DMatrix, DVector};

use crate::domain::{CandidateFit, ComplexityClass};
use crate::math::solve_least_squares;
use crate::models::{basis_value, predict};

/// Fit one candidate class. `Err` carries the skip reason for diagnostics.
///
/// Callers are responsible for input validation (equal lengths, at least two
/// distinct sizes, sizes >= 1); see `selection::select_best_fit`.
pub fn fit_candidate(
    class: ComplexityClass,
    sizes: &[u64],
    times: &[f64],
) -> Result<CandidateFit, String> {
    let n = sizes.len();

    if let Some(&t) = times.iter().find(|t| !t.is_finite()) {
        return Err(format!("non-finite measured time {t}"));
    }

    let mut basis = Vec::with_capacity(n);
    for &size in sizes {
        let g = basis_value(class, size);
        if !g.is_finite() {
            return Err(format!("non-finite basis value at size {size}"));
        }
        basis.push(g);
    }

    let x = DMatrix::from_iterator(n, 1, basis.iter().copied());
    let y = DVector::from_row_slice(times);

    let beta = solve_least_squares(&x, &y).ok_or("least-squares solve failed")?;
    let coefficient = beta[0];

    let mut sse = 0.0;
    for (&size, &t) in sizes.iter().zip(times.iter()) {
        let r = t - predict(class, size, coefficient);
        sse += r * r;
    }
    let mse = sse / n as f64;

    if !mse.is_finite() {
        return Err(format!("non-finite mean squared error {mse}"));
    }

    Ok(CandidateFit {
        class,
        coefficient,
        mse,
    })
}
