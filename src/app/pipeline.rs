//! Shared estimation pipeline used by the CLI front-end.
//!
//! Workflow: resolve workloads -> measure each one -> fit/select -> report.
//! Each target's estimation is independent end-to-end: a target that panics
//! or times out produces a recorded failure and does not block results for
//! the remaining targets.

use log::debug;

use crate::domain::{EstimationResult, Measurements, RunConfig, RunFailure, validate_sizes};
use crate::error::AppError;
use crate::fit::select_best_fit;
use crate::measure::{measure, measure_with_timeout};
use crate::models::CANDIDATES;
use crate::workloads::{self, WorkloadSpec};

/// All computed outputs of a single `bigo run`.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Successful estimations, in request order.
    pub results: Vec<EstimationResult>,
    /// Targets whose estimation failed fatally, in request order.
    pub failures: Vec<RunFailure>,
}

/// Execute the full estimation pipeline for the configured workload names.
pub fn run_estimate(config: &RunConfig) -> Result<RunOutput, AppError> {
    validate_sizes(&config.sizes)?;
    let specs = workloads::resolve(&config.workloads)?;
    run_workloads(&specs, config)
}

/// Execute the pipeline over an explicit, caller-constructed workload list.
///
/// This is the seam tests use to inject synthetic targets without touching
/// the built-in registry.
pub fn run_workloads(specs: &[&WorkloadSpec], config: &RunConfig) -> Result<RunOutput, AppError> {
    validate_sizes(&config.sizes)?;

    let mut results = Vec::new();
    let mut failures = Vec::new();

    // Strictly sequential: timing one target while another runs would
    // corrupt both measurements.
    for spec in specs {
        match estimate_one(spec, config) {
            Ok(result) => {
                debug!("{}: {}", result.name, result.best_label());
                results.push(result);
            }
            Err(failure) => {
                debug!("{}: estimation failed: {}", failure.name, failure.reason);
                failures.push(failure);
            }
        }
    }

    Ok(RunOutput { results, failures })
}

fn estimate_one(spec: &WorkloadSpec, config: &RunConfig) -> Result<EstimationResult, RunFailure> {
    let fail = |reason: String| RunFailure {
        name: spec.name.to_string(),
        reason,
    };

    // A panicking target is fatal to this estimation only; the harness lets
    // panics propagate and the pipeline contains them here.
    let run = spec.run;
    let measured: std::thread::Result<Result<Measurements, AppError>> =
        std::panic::catch_unwind(|| match config.timeout {
            Some(timeout) => measure_with_timeout(run, &config.sizes, timeout),
            None => Ok(measure(run, &config.sizes)),
        });

    let measurements = match measured {
        Ok(Ok(m)) => m,
        Ok(Err(err)) => return Err(fail(err.to_string())),
        Err(payload) => {
            // `as_ref` matters: coercing `&Box<dyn Any>` itself would make
            // every downcast miss.
            let msg = panic_message(payload.as_ref());
            return Err(fail(format!("target panicked: {msg}")));
        }
    };

    let selection = select_best_fit(&CANDIDATES, &measurements)
        .map_err(|err| fail(err.to_string()))?;

    Ok(EstimationResult {
        name: spec.name.to_string(),
        measurements,
        selection,
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
