//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `subdomain_finder` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Ctrl-C handling
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use colored::*;
use log::{error, warn};
use tokio_util::sync::CancellationToken;

use subdomain_finder::initialization::init_logger_with;
use subdomain_finder::report::{ConsoleReport, JsonFileReport, ReportSink};
use subdomain_finder::{
    run_discovery, Cli, DiscoveryError, NoopObserver, ProgressBars, ReportError, ScanObserver,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                process::exit(0);
            }
            _ => {
                eprint!("{e}");
                process::exit(1);
            }
        },
    };
    let verbose = cli.verbose;
    let show_progress = !cli.no_progress;
    let config = cli.into_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("{} {}", "❌ Error:".red(), e);
        process::exit(1);
    }

    println!(
        "{} {}",
        "🚀 Searching subdomains for".bright_blue(),
        config.domain.bright_yellow()
    );

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, stopping scan");
                cancel.cancel();
            }
        });
    }

    let observer: Arc<dyn ScanObserver> = if show_progress {
        Arc::new(ProgressBars::new())
    } else {
        Arc::new(NoopObserver)
    };

    let results_dir = config.results_dir.clone();
    let output = config.output.clone();

    match run_discovery(config, cancel, observer).await {
        Ok(outcome) => {
            let report = outcome.report();

            ConsoleReport::new(io::stdout().lock())
                .emit(&report)
                .context("Failed to print results")?;

            if let Some(file_name) = output {
                match JsonFileReport::new(results_dir, file_name).emit(&report) {
                    Ok(()) => {}
                    Err(ReportError::NoResults) => warn!("No results to save"),
                    Err(e) => error!("{e}"),
                }
            }

            println!(
                "\n⏱️  Scan completed in {:.2} seconds",
                outcome.elapsed_seconds
            );
            Ok(())
        }
        Err(e) if matches!(e.downcast_ref::<DiscoveryError>(), Some(DiscoveryError::Cancelled)) => {
            println!("\n{}", "⚠️  Scan interrupted by user".yellow());
            Ok(())
        }
        Err(e) => {
            if verbose {
                eprintln!("subdomain_finder error: {:?}", e);
            } else {
                eprintln!("subdomain_finder error: {:#}", e);
            }
            process::exit(1);
        }
    }
}
