//! CLI interface for Gridwork.
//!
//! Without a subcommand the terminal client starts. The subcommands are
//! non-interactive views over the same catalog: arguments in, plain text or
//! JSON out.

mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::Catalog;
use crate::config::LogLevel;
use crate::filter::filter_jobs;
use crate::model::{CategoryFilter, FilterState, Trip};
use crate::summary::{Summarizer, TextGenerator};

use format::{format_job, format_trip};

/// Gridwork: find work on the city grid.
#[derive(Debug, Parser)]
#[command(name = "gridwork", version, after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Config file (defaults to `~/.gridwork/config.toml`).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the generated catalog. Same seed, same jobs.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Overrides `log-level` from the config file.
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

const USAGE_HELP: &str = r#"Examples:
  gridwork                                 open the terminal client
  gridwork --seed 7 jobs --query cyber     list matching jobs
  gridwork jobs --category technical --immediate --json
  gridwork --seed 7 summarize 12           pitch for job 12
  gridwork trips"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List jobs passing a filter, in catalog order.
    Jobs {
        /// Case-insensitive match on title or company.
        #[arg(long, default_value = "")]
        query: String,

        /// all, service, physical, technical, or creative.
        #[arg(long, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,

        /// Only jobs that need someone now.
        #[arg(long)]
        immediate: bool,

        /// Print a JSON array instead of one line per job.
        #[arg(long)]
        json: bool,
    },

    /// Print a short promotional summary for one job.
    ///
    /// Falls back to a stock blurb when the provider is unavailable.
    Summarize {
        /// Job id as shown by `gridwork jobs`.
        job_id: String,
    },

    /// List trips. The active one is marked with `*`.
    Trips,
}

/// Run a subcommand, returning an error message on failure.
pub fn run<G: TextGenerator>(
    command: Command,
    catalog: &Catalog,
    summarizer: &Summarizer<G>,
    trips: &[Trip],
) -> Result<(), String> {
    match command {
        Command::Jobs {
            query,
            category,
            immediate,
            json,
        } => cmd_jobs(
            catalog,
            &FilterState {
                query,
                category,
                immediate_only: immediate,
            },
            json,
        ),
        Command::Summarize { job_id } => cmd_summarize(catalog, summarizer, &job_id),
        Command::Trips => {
            cmd_trips(trips);
            Ok(())
        }
    }
}

fn cmd_jobs(catalog: &Catalog, filter: &FilterState, json: bool) -> Result<(), String> {
    let jobs = filter_jobs(&catalog.jobs, filter);

    if json {
        let out = serde_json::to_string_pretty(&jobs)
            .map_err(|e| format!("failed to serialize jobs: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    if jobs.is_empty() {
        println!("No signal in sector");
        return Ok(());
    }

    for job in jobs {
        println!("{}", format_job(job));
    }
    Ok(())
}

fn cmd_summarize<G: TextGenerator>(
    catalog: &Catalog,
    summarizer: &Summarizer<G>,
    job_id: &str,
) -> Result<(), String> {
    let job = catalog
        .job(job_id)
        .ok_or_else(|| format!("no job with id {job_id}"))?;
    println!("{}", summarizer.summarize_or_fallback(job).trim());
    Ok(())
}

fn cmd_trips(trips: &[Trip]) {
    for trip in trips {
        println!("{}", format_trip(trip));
    }
}
