//! CLI argument parsing for render-regress

use crate::compare::CompareConfig;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the regression report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "render-regress")]
#[command(version)]
#[command(about = "Compare render measurements against a baseline", long_about = None)]
pub struct Cli {
    /// Enable debug tracing on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare a current measurement file against a baseline
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Baseline measurement file (one JSON entry per line)
    #[arg(short, long, value_name = "FILE")]
    pub baseline: PathBuf,

    /// Current measurement file (one JSON entry per line)
    #[arg(short, long, value_name = "FILE")]
    pub current: PathBuf,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Minimum relative duration change for a significant result (fraction)
    #[arg(long, value_name = "FRACTION")]
    pub significant_percent: Option<f64>,

    /// Minimum absolute duration change for a significant result (ms)
    #[arg(long, value_name = "MS")]
    pub significant_duration: Option<f64>,

    /// Duration change below which a result is meaningless (ms)
    #[arg(long, value_name = "MS")]
    pub meaningless_duration: Option<f64>,

    /// Exit with status 1 when any significant change is found
    #[arg(long)]
    pub fail_on_significant: bool,
}

impl CompareArgs {
    /// Default thresholds with any command-line overrides applied
    pub fn config(&self) -> CompareConfig {
        let defaults = CompareConfig::default();
        CompareConfig {
            significant_percent: self
                .significant_percent
                .unwrap_or(defaults.significant_percent),
            significant_duration: self
                .significant_duration
                .unwrap_or(defaults.significant_duration),
            meaningless_duration: self
                .meaningless_duration
                .unwrap_or(defaults.meaningless_duration),
        }
    }
}
