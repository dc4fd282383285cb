//! Run CLI command: one full matching pass.

use chrono::Utc;
use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::MatchConfig;
use crate::models::{DirectoryIndex, Person, Sponsorship};
use crate::services::{build_mentee_pool, build_mentor_pool, Matcher};
use crate::{io, rendering, Error, Result};

/// Arguments for the `run` command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to the survey CSV export.
    #[arg(long)]
    pub survey: PathBuf,

    /// Path to the newline-delimited JSON directory export.
    #[arg(long)]
    pub directory: PathBuf,

    /// Target office to match within (overrides the config file).
    #[arg(long)]
    pub office: Option<String>,

    /// File of mentor emails to prioritize, one per line.
    #[arg(long)]
    pub sponsored_mentors: Option<PathBuf>,

    /// File of mentee emails to prioritize, one per line.
    #[arg(long)]
    pub sponsored_mentees: Option<PathBuf>,

    /// File of forced `mentor_email,mentee_email` pairs.
    #[arg(long)]
    pub pairs: Option<PathBuf>,

    /// Random seed for reproducible pool shuffling.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Runs one matching pass and returns the rendered report.
///
/// # Errors
///
/// Returns an error when any input file cannot be read or parsed, or when
/// no target office is configured.
pub fn cmd_run(args: &RunArgs, mut config: MatchConfig) -> Result<String> {
    if let Some(office) = &args.office {
        config.office.clone_from(office);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if config.office.is_empty() {
        return Err(Error::InvalidInput(
            "no target office configured (pass --office or set it in the config file)".to_string(),
        ));
    }

    let rows = io::read_rows(open(&args.survey)?, &config.layout)?;
    let records = io::read_records(BufReader::new(open(&args.directory)?))?;
    let index = DirectoryIndex::build(records);
    tracing::debug!(rows = rows.len(), directory = index.len(), "inputs loaded");

    let people = Person::resolve_all(rows, &index, config.layout);
    let now = Utc::now();
    let mentors = build_mentor_pool(&people, &config, now);
    let mentees = build_mentee_pool(&people, &config, now);
    tracing::info!(
        office = %config.office,
        mentors = mentors.len(),
        mentees = mentees.len(),
        "filtered candidate pools"
    );

    let sponsorship = load_sponsorship(args)?;
    let outcome = Matcher::new(&config, &index).run(mentors, mentees, &sponsorship);
    Ok(rendering::render_report(&outcome, now))
}

fn load_sponsorship(args: &RunArgs) -> Result<Sponsorship> {
    let mut sponsorship = Sponsorship::default();
    if let Some(path) = &args.sponsored_mentors {
        sponsorship.priority_mentors = io::read_emails(BufReader::new(open(path)?))?;
    }
    if let Some(path) = &args.sponsored_mentees {
        sponsorship.priority_mentees = io::read_emails(BufReader::new(open(path)?))?;
    }
    if let Some(path) = &args.pairs {
        sponsorship.forced_pairs = io::read_pairs(BufReader::new(open(path)?))?;
    }
    Ok(sponsorship)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::OperationFailed {
        operation: format!("open {}", path.display()),
        cause: e.to_string(),
    })
}
