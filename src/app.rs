//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves workloads and runs the estimation pipeline
//! - prints reports/plots
//! - writes optional exports

use std::time::Duration;

use clap::Parser;

use crate::cli::{Command, PlotArgs, RunArgs};
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `bigo` binary.
pub fn run() -> Result<(), AppError> {
    // We want `bigo linear quadratic` to behave like `bigo run linear
    // quadratic`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the short UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Run(args) => handle_run(args),
        Command::List => handle_list(),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_run(args: RunArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let output = pipeline::run_estimate(&config)?;

    println!("{}", crate::report::format_run_summary(&output, &config));

    if config.plot {
        for result in &output.results {
            println!(
                "{}",
                crate::plot::render_ascii_plot(result, config.plot_width, config.plot_height)
            );
        }
    }

    if let Some(path) = &config.export {
        crate::io::write_results_json(path, &output, &config)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let saved = crate::io::read_results_json(&args.file)?;
    for result in &saved.results {
        println!(
            "{}",
            crate::plot::render_ascii_plot(result, args.width, args.height)
        );
    }
    for failure in &saved.failures {
        println!("{}: {}", failure.name, failure.reason);
    }
    Ok(())
}

fn handle_list() -> Result<(), AppError> {
    for workload in crate::workloads::registry() {
        println!("{:<14} {}", workload.name, workload.summary);
    }
    Ok(())
}

pub fn run_config_from_args(args: &RunArgs) -> RunConfig {
    RunConfig {
        workloads: args.workloads.clone(),
        sizes: args.sizes.clone(),
        timeout: (args.timeout_ms > 0).then(|| Duration::from_millis(args.timeout_ms)),
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export: args.export.clone(),
    }
}

/// Rewrite argv so `bigo <workloads...>` defaults to `bigo run <workloads...>`.
///
/// Rules:
/// - `bigo`                    -> `bigo run`
/// - `bigo linear --sizes ...` -> `bigo run linear --sizes ...`
/// - `bigo --help/--version`   -> unchanged (show top-level help/version)
/// - `bigo run/list/plot ...`  -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("run".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "run" | "list" | "plot");
    if is_subcommand {
        return argv;
    }

    argv.insert(1, "run".to_string());
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_run() {
        assert_eq!(rewrite_args(args(&["bigo"])), args(&["bigo", "run"]));
    }

    #[test]
    fn workload_names_are_forwarded_to_run() {
        assert_eq!(
            rewrite_args(args(&["bigo", "linear", "quadratic"])),
            args(&["bigo", "run", "linear", "quadratic"])
        );
        assert_eq!(
            rewrite_args(args(&["bigo", "--sizes", "10", "100"])),
            args(&["bigo", "run", "--sizes", "10", "100"])
        );
    }

    #[test]
    fn explicit_subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["bigo", "run", "linear"])),
            args(&["bigo", "run", "linear"])
        );
        assert_eq!(rewrite_args(args(&["bigo", "list"])), args(&["bigo", "list"]));
        assert_eq!(
            rewrite_args(args(&["bigo", "plot", "--file", "r.json"])),
            args(&["bigo", "plot", "--file", "r.json"])
        );
        assert_eq!(rewrite_args(args(&["bigo", "--help"])), args(&["bigo", "--help"]));
    }

    #[test]
    fn plot_subcommand_renders_saved_results() {
        use crate::app::pipeline::RunOutput;
        use crate::domain::{
            CandidateFit, ComplexityClass, EstimationResult, FitSelection, Measurements, RunConfig,
        };

        let output = RunOutput {
            results: vec![EstimationResult {
                name: "linear".to_string(),
                measurements: Measurements {
                    sizes: vec![10, 100, 1000],
                    times: vec![1e-5, 1e-4, 1e-3],
                },
                selection: FitSelection {
                    best: Some(CandidateFit {
                        class: ComplexityClass::Linear,
                        coefficient: 1e-6,
                        mse: 0.0,
                    }),
                    fits: vec![],
                    skipped: vec![],
                },
            }],
            failures: vec![],
        };
        let config = RunConfig {
            workloads: vec![],
            sizes: vec![10, 100, 1000],
            timeout: None,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export: None,
        };

        let path = std::env::temp_dir().join(format!("bigo-plot-test-{}.json", std::process::id()));
        crate::io::write_results_json(&path, &output, &config).unwrap();

        let plotted = handle_plot(PlotArgs {
            file: path.clone(),
            width: 40,
            height: 10,
        });
        let _ = std::fs::remove_file(&path);
        plotted.unwrap();
    }

    #[test]
    fn plot_subcommand_rejects_missing_file() {
        let err = handle_plot(PlotArgs {
            file: std::path::PathBuf::from("/nonexistent/bigo-results.json"),
            width: 40,
            height: 10,
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn timeout_flag_maps_to_duration() {
        let base = RunArgs {
            workloads: vec![],
            sizes: vec![10, 100],
            timeout_ms: 0,
            plot: true,
            no_plot: false,
            width: 100,
            height: 25,
            export: None,
        };
        assert!(run_config_from_args(&base).timeout.is_none());

        let with_timeout = RunArgs {
            timeout_ms: 250,
            ..base.clone()
        };
        assert_eq!(
            run_config_from_args(&with_timeout).timeout,
            Some(Duration::from_millis(250))
        );

        let no_plot = RunArgs {
            no_plot: true,
            ..base
        };
        assert!(!run_config_from_args(&no_plot).plot);
    }
}
