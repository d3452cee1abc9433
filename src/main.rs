// SPDX-License-Identifier: PMPL-1.0-or-later
//! fp-a11y-check CLI - Accessibility compliance gate for FP Esperienze
//!
//! Exit status is the machine-consumable signal: 0 when all four checks
//! pass, 1 otherwise.

use clap::Parser;
use fp_a11y_check::gate;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Accessibility compliance gate for the FP Esperienze plugin
#[derive(Parser)]
#[command(name = "fp-a11y-check")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Plugin root to check (defaults to the current directory)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("fp_a11y_check=debug")
    } else {
        EnvFilter::new("fp_a11y_check=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    let outcome = gate::run(&cli.root, &mut stdout)?;

    if !outcome.passed() {
        std::process::exit(1);
    }

    Ok(())
}
