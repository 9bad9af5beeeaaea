use anyhow::Result;
use bundlelens_composition::NpmBuild;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "bundlelens")]
#[command(about = "Static analysis of Next.js bundle output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build an app and report its bundle composition
    Analyze(bundlelens_composition::Config),
    /// Check an existing build for symbols tree shaking should have kept or dropped
    TreeShaking(bundlelens_tree_shaking::Config),
}

fn run(command: Commands) -> Result<()> {
    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());
    let start = Instant::now();

    match command {
        Commands::Analyze(cfg) => {
            info!("Running bundle analysis for app {:?}", cfg.app);
            debug!("Config: root={:?}, skip_build={}", cfg.root, cfg.skip_build);

            let report =
                bundlelens_composition::run_bundle_analysis(&mut stdout, &cfg, &NpmBuild)?;
            debug!(
                "Analyzed {} files in {}ms (warnings: {})",
                report.files.len(),
                start.elapsed().as_millis(),
                report.health.has_warnings()
            );
        }
        Commands::TreeShaking(cfg) => {
            info!("Running tree shaking check for app {:?}", cfg.app);

            let result = bundlelens_tree_shaking::run_tree_shaking_check(&cfg)?;
            bundlelens_tree_shaking::print_tree_shaking_report(&mut stdout, &result)?;
            debug!("Scanned {} files in {}ms", result.files_scanned, start.elapsed().as_millis());
        }
    }

    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    // Size warnings are part of the report and never change the exit code.
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "❌".red(), e);
            ExitCode::FAILURE
        }
    }
}
