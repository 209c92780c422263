//! Least squares solver.
//!
//! Each candidate growth model is linear in its single coefficient `a`
//! (`time ≈ a · g(n)`), so fitting one candidate reduces to an ordinary
//! least-squares solve with a one-column design matrix of basis values.
//!
//! Implementation choices:
//! - We use SVD so the solve stays robust for tall matrices and for
//!   near-degenerate columns (e.g., the constant basis, or a logarithmic
//!   column over a narrow size range).
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic
//!   for non-square matrices.)
//! - The parameter dimension is one, so SVD cost is negligible.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}
