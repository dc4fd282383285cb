//! Binary entry point for mentormatch.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr/print_stdout in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use mentormatch::cli::{cmd_run, RunArgs};
use mentormatch::config::{ConfigFile, MatchConfig};
use mentormatch::observability;

/// Mentormatch - greedy mentor/mentee matching for one office.
#[derive(Parser)]
#[command(name = "mentormatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run one matching pass and print the report.
    Run(RunArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    observability::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = MatchConfig::default();
    if let Some(path) = &cli.config {
        let file = ConfigFile::load(path)
            .with_context(|| format!("loading config {}", path.display()))?;
        config.apply_file(file);
    }

    match cli.command {
        Commands::Run(args) => {
            let report = cmd_run(&args, config)?;
            print!("{report}");
        }
    }
    Ok(())
}
