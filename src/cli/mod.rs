//! Command-line parsing for the empirical complexity probe.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the measurement/fitting code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::DEFAULT_SIZES;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "bigo",
    version,
    about = "Empirical time-complexity probe (timing + least-squares fit)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Time the selected workloads, classify each one, and optionally
    /// plot/export the results.
    Run(RunArgs),
    /// List the built-in workloads.
    List,
    /// Plot a previously exported results JSON.
    Plot(PlotArgs),
}

/// Options for an estimation run.
#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    /// Workload names to estimate (see `bigo list`). Defaults to the
    /// built-in set minus `cubic`.
    #[arg(value_name = "WORKLOAD")]
    pub workloads: Vec<String>,

    /// Input sizes to test, in the given order.
    #[arg(long, num_args = 1.., default_values_t = DEFAULT_SIZES)]
    pub sizes: Vec<u64>,

    /// Per-invocation timeout in milliseconds (0 disables the watchdog).
    #[arg(long, default_value_t = 0)]
    pub timeout_ms: u64,

    /// Render an ASCII plot per workload (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export results (measurements + selection diagnostics) to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for plotting saved results.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Results JSON file produced by `bigo run --export`.
    #[arg(long, value_name = "JSON")]
    pub file: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
