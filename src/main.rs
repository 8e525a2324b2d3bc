use anyhow::{Context, Result};
use clap::Parser;
use render_regress::cli::{Cli, Command, CompareArgs, OutputFormat};
use render_regress::{compare, entries};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run_compare(args: &CompareArgs) -> Result<ExitCode> {
    let baseline = entries::load_entries(&args.baseline)
        .with_context(|| format!("loading baseline {}", args.baseline.display()))?;
    let current = entries::load_entries(&args.current)
        .with_context(|| format!("loading current {}", args.current.display()))?;

    let report = compare::compare_runs(&baseline, &current, &args.config())?;

    match args.format {
        OutputFormat::Text => print!("{}", report.to_report_string()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if args.fail_on_significant && report.has_significant_changes() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match &cli.command {
        Command::Compare(args) => run_compare(args),
    }
}
