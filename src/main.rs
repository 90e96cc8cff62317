mod catalog;
mod cli;
mod config;
mod effects;
mod filter;
mod map;
mod model;
mod state;
mod summary;
mod tui;

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use std::{io, process};

use clap::Parser;
use tracing as log;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

use catalog::{Catalog, seed_trips};
use config::{Config, LogLevel};
use summary::{GeminiClient, Summarizer};

fn main() {
    let cli = cli::Cli::parse();

    let config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    init_logging(
        cli.log_level.unwrap_or(config.log_level),
        cli.command.is_none(),
    );
    let config_path = cli.config.clone().or_else(Config::path);
    log::info!(path = ?config_path, model = %config.model, "loaded config");

    let client = GeminiClient::new(
        config.api_base_url.as_str(),
        config.api_key(),
        config.request_timeout(),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: failed to build HTTP client: {e}");
        process::exit(1);
    });
    if config.api_key().is_none() {
        log::warn!("no API key configured, summaries will use the fallback");
    }
    let summarizer = Summarizer::new(client, config.model.as_str());
    let catalog = Catalog::generate(cli.seed.or(config.seed));

    let result = match cli.command {
        Some(command) => cli::run(command, &catalog, &summarizer, &seed_trips()),
        None => tui::run(catalog, summarizer).map_err(|e| format!("terminal failure: {e}")),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// The TUI owns the terminal, so it logs to a file. Subcommands log to
/// stderr. A log file that cannot be opened leaves logging off.
fn init_logging(level: LogLevel, tui: bool) {
    let filter = LevelFilter::from_level(level.into());

    if tui {
        let Some(file) = Config::log_path().and_then(|p| open_log(&p).ok()) else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_thread_names(true)
                    .with_writer(Mutex::new(file))
                    .with_filter(filter),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_filter(filter),
            )
            .init();
    }
}

fn open_log(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
