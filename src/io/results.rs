//! Read/write results JSON files.
//!
//! Results JSON is the "portable" representation of a run:
//! - the requested size list
//! - per-target measurements and selection diagnostics
//! - per-target failures
//!
//! The schema is defined by `domain::ResultsFile`; a downstream plotting or
//! comparison tool can consume it without any fitting logic.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::app::pipeline::RunOutput;
use crate::domain::{ResultsFile, RunConfig};
use crate::error::AppError;

/// Write a results JSON file.
pub fn write_results_json(
    path: &Path,
    output: &RunOutput,
    config: &RunConfig,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!(
            "Failed to create results JSON '{}': {e}",
            path.display()
        ))
    })?;

    let results = ResultsFile {
        tool: "bigo".to_string(),
        created_utc: Utc::now(),
        sizes: config.sizes.clone(),
        results: output.results.clone(),
        failures: output.failures.clone(),
    };

    serde_json::to_writer_pretty(file, &results)
        .map_err(|e| AppError::config(format!("Failed to write results JSON: {e}")))?;

    Ok(())
}

/// Read a results JSON file.
pub fn read_results_json(path: &Path) -> Result<ResultsFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::config(format!(
            "Failed to open results JSON '{}': {e}",
            path.display()
        ))
    })?;
    let results: ResultsFile = serde_json::from_reader(file)
        .map_err(|e| AppError::config(format!("Invalid results JSON: {e}")))?;
    Ok(results)
}
