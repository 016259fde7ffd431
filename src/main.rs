//! upstream-bump - upstream release checker CLI tool
//!
//! Checks OffchainLabs/prysm for a new release and, when the tag moved,
//! bumps the package manifest and compose file and reports the result to
//! the calling workflow.

use clap::Parser;
use std::process::ExitCode;
use upstream_bump::cli::CliArgs;
use upstream_bump::orchestrator::{Orchestrator, RunReport};
use upstream_bump::output::{AutomationOutputs, Console, Verbosity};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    let console = Console::new(Verbosity::from_cli(args.verbose, args.quiet));

    // Run the main logic and handle errors
    match run(args, console).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            console.error(e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs, console: Console) -> anyhow::Result<ExitCode> {
    let outputs = AutomationOutputs::new(args.output_file(), args.env_file());

    if args.verbose {
        eprintln!("upstream-bump v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Manifest: {}", args.manifest.display());
        eprintln!("Compose: {}", args.compose.display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let orchestrator = Orchestrator::new(&args)?;
    let report = orchestrator.run().await?;

    if !report.is_success() {
        // Failure paths emit no automation output
        return Ok(ExitCode::FAILURE);
    }

    if report.dry_run {
        if !outputs.is_empty() {
            console.detail("Dry run: automation outputs not written");
        }
        return Ok(ExitCode::SUCCESS);
    }

    publish(&outputs, &report)?;
    Ok(ExitCode::SUCCESS)
}

/// Write automation outputs for the completed run
fn publish(outputs: &AutomationOutputs, report: &RunReport) -> anyhow::Result<()> {
    match report.decision.planned() {
        Some(plan) => outputs.publish_update(plan)?,
        None => outputs.publish_up_to_date()?,
    }
    Ok(())
}
