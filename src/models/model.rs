//! Model evaluation for the candidate growth classes.
//!
//! The fitter relies on two primitive operations:
//! - evaluate the basis `g(n)` for a given class and size (for least squares)
//! - predict `time(n)` given a fitted coefficient (for residuals/plots)
//!
//! Every candidate is of the form `time ≈ a · g(n)` with exactly one free
//! coefficient `a`, so the regression stays linear in `a` for all classes.

use crate::domain::ComplexityClass;

/// The default candidate set, in asymptotic order (smallest first).
///
/// The fitter takes the candidate set as an explicit argument, so tests can
/// inject a reduced set; this constant is what the pipeline passes in.
pub const CANDIDATES: [ComplexityClass; 7] = [
    ComplexityClass::Constant,
    ComplexityClass::Logarithmic,
    ComplexityClass::Linear,
    ComplexityClass::Linearithmic,
    ComplexityClass::Quadratic,
    ComplexityClass::Cubic,
    ComplexityClass::Exponential,
];

/// Evaluate the basis `g(n)` for the given class.
///
/// Defined for `n >= 1`. The exponential basis overflows `f64` for large `n`
/// (roughly `n > 1024`); the fitter treats the resulting non-finite value as
/// a skip condition for that candidate rather than an error.
pub fn basis_value(class: ComplexityClass, n: u64) -> f64 {
    let n = n as f64;
    match class {
        ComplexityClass::Constant => 1.0,
        ComplexityClass::Logarithmic => n.log2(),
        ComplexityClass::Linear => n,
        ComplexityClass::Linearithmic => n * n.log2(),
        ComplexityClass::Quadratic => n * n,
        ComplexityClass::Cubic => n * n * n,
        ComplexityClass::Exponential => n.exp2(),
    }
}

/// Predict `time(n)` for the given class and fitted coefficient.
pub fn predict(class: ComplexityClass, n: u64, coefficient: f64) -> f64 {
    coefficient * basis_value(class, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_are_in_asymptotic_order_and_unique() {
        assert_eq!(CANDIDATES.len(), 7);
        assert_eq!(CANDIDATES[0], ComplexityClass::Constant);
        assert_eq!(CANDIDATES[6], ComplexityClass::Exponential);
        for i in 0..CANDIDATES.len() {
            for j in (i + 1)..CANDIDATES.len() {
                assert_ne!(CANDIDATES[i], CANDIDATES[j]);
            }
        }
    }

    #[test]
    fn basis_finite_for_typical_sizes() {
        for class in [
            ComplexityClass::Constant,
            ComplexityClass::Logarithmic,
            ComplexityClass::Linear,
            ComplexityClass::Linearithmic,
            ComplexityClass::Quadratic,
            ComplexityClass::Cubic,
        ] {
            for &n in &[1u64, 10, 100, 500, 1000, 2000] {
                let g = basis_value(class, n);
                assert!(g.is_finite(), "{class:?} at n={n} gave {g}");
            }
        }
    }

    #[test]
    fn constant_basis_ignores_size() {
        assert_eq!(basis_value(ComplexityClass::Constant, 1), 1.0);
        assert_eq!(basis_value(ComplexityClass::Constant, 2000), 1.0);
    }

    #[test]
    fn exponential_basis_overflows_large_sizes() {
        assert!(basis_value(ComplexityClass::Exponential, 10).is_finite());
        assert!(basis_value(ComplexityClass::Exponential, 2000).is_infinite());
    }

    #[test]
    fn predict_scales_linearly_in_coefficient() {
        let one = predict(ComplexityClass::Quadratic, 30, 1.0);
        let two = predict(ComplexityClass::Quadratic, 30, 2.0);
        assert!((two - 2.0 * one).abs() < 1e-12);
    }
}
