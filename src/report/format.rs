//! Run summary formatting.
//!
//! The load-bearing lines are the `"<name>: <label>"` classification lines;
//! everything else is diagnostics (per-candidate scores, skip reasons,
//! failures).

use crate::app::pipeline::RunOutput;
use crate::domain::{EstimationResult, RunConfig};

/// Format the full run summary.
pub fn format_run_summary(output: &RunOutput, config: &RunConfig) -> String {
    let mut out = String::new();

    out.push_str("=== bigo - empirical complexity probe ===\n");
    out.push_str(&format!("Sizes: {}\n\n", fmt_sizes(&config.sizes)));

    for result in &output.results {
        out.push_str(&format_result(result));
    }

    if !output.failures.is_empty() {
        out.push_str("Failures:\n");
        for failure in &output.failures {
            out.push_str(&format!("- {}: {}\n", failure.name, failure.reason));
        }
    }

    out
}

/// Format one target's classification line plus candidate diagnostics.
pub fn format_result(result: &EstimationResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: {}\n", result.name, result.best_label()));

    let best_class = result.selection.best.map(|fit| fit.class);
    for fit in &result.selection.fits {
        let chosen = if Some(fit.class) == best_class { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:<12} coeff={:.3e} mse={:.3e}\n",
            fit.class.display_name(),
            fit.coefficient,
            fit.mse
        ));
    }
    for (class, reason) in &result.selection.skipped {
        out.push_str(&format!("  (skipped {}) {reason}\n", class.display_name()));
    }
    out.push('\n');

    out
}

fn fmt_sizes(sizes: &[u64]) -> String {
    let parts: Vec<String> = sizes.iter().map(|n| n.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CandidateFit, ComplexityClass, FitSelection, Measurements, RunFailure,
    };

    fn result_with_linear_best(name: &str) -> EstimationResult {
        EstimationResult {
            name: name.to_string(),
            measurements: Measurements {
                sizes: vec![10, 100],
                times: vec![1e-5, 1e-4],
            },
            selection: FitSelection {
                best: Some(CandidateFit {
                    class: ComplexityClass::Linear,
                    coefficient: 1e-6,
                    mse: 0.0,
                }),
                fits: vec![
                    CandidateFit {
                        class: ComplexityClass::Constant,
                        coefficient: 5.5e-5,
                        mse: 2e-9,
                    },
                    CandidateFit {
                        class: ComplexityClass::Linear,
                        coefficient: 1e-6,
                        mse: 0.0,
                    },
                ],
                skipped: vec![(
                    ComplexityClass::Exponential,
                    "non-finite basis value at size 2000".to_string(),
                )],
            },
        }
    }

    #[test]
    fn summary_contains_classification_line_per_target() {
        let output = RunOutput {
            results: vec![result_with_linear_best("good")],
            failures: vec![RunFailure {
                name: "bad".to_string(),
                reason: "target panicked: boom".to_string(),
            }],
        };
        let config = RunConfig {
            workloads: vec![],
            sizes: vec![10, 100],
            timeout: None,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export: None,
        };

        let text = format_run_summary(&output, &config);
        assert!(text.contains("Sizes: [10, 100]"));
        assert!(text.contains("good: O(n)"));
        assert!(text.contains("* O(n)"));
        assert!(text.contains("(skipped O(2^n))"));
        assert!(text.contains("- bad: target panicked: boom"));
    }

    #[test]
    fn no_fit_result_prints_sentinel() {
        let result = EstimationResult {
            name: "odd".to_string(),
            measurements: Measurements {
                sizes: vec![10, 100],
                times: vec![f64::NAN, 0.1],
            },
            selection: FitSelection {
                best: None,
                fits: vec![],
                skipped: vec![],
            },
        };
        let text = format_result(&result);
        assert!(text.starts_with("odd: no fit found"));
    }
}
