//! `availability` CLI: query a freelancer's month view or free slots from JSON data.
//!
//! ## Usage
//!
//! ```sh
//! # Month view for January 2024
//! availability --entries entries.json --bookings bookings.json \
//!   month --freelancer f1 --start 2024-01-01 --end 2024-01-31
//!
//! # Free slots on one date, bookings scoped to a category
//! availability --entries entries.json --bookings bookings.json \
//!   day --freelancer f1 --date 2024-01-08 --category design
//!
//! # Paths from a TOML config, fixed "now" for reproducible output
//! availability --config availability.toml --as-of 2024-01-01T00:00:00 --pretty \
//!   month --freelancer f1 --start 2024-01-01 --end 2024-02-29
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=availability_engine=debug` to trace the pipeline.

mod config;
mod file_source;

use std::path::PathBuf;

use anyhow::{Context, Result};
use availability_engine::{query_day, query_month, DayQuery, MonthQuery};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::file_source::FileSource;

#[derive(Parser)]
#[command(
    name = "availability",
    version,
    about = "Freelancer availability: month view and free booking slots"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config file (defaults to $AVAILABILITY_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON array of availability entries (overrides the config)
    #[arg(long, global = true)]
    entries: Option<PathBuf>,

    /// JSON array of bookings (overrides the config)
    #[arg(long, global = true)]
    bookings: Option<PathBuf>,

    /// Treat this local date-time as "now" (YYYY-MM-DDTHH:MM:SS)
    #[arg(long, global = true, value_parser = parse_as_of)]
    as_of: Option<NaiveDateTime>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Dates with open time across the months spanned by --start..--end
    Month {
        #[arg(long)]
        freelancer: String,
        /// First date of the range (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Last date of the range (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Only bookings in this category block slots
        #[arg(long)]
        category: Option<String>,
    },
    /// Free one-hour slots on a single date
    Day {
        #[arg(long)]
        freelancer: String,
        /// The date to list (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Only bookings in this category block slots
        #[arg(long)]
        category: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.entries, cli.bookings);
    init_tracing(config.log_filter());

    let as_of = cli.as_of.unwrap_or_else(|| Local::now().naive_local());
    tracing::debug!(%as_of, "starting");

    // Validate request parameters before touching any data file.
    let rendered = match cli.command {
        Commands::Month {
            freelancer,
            start,
            end,
            category,
        } => {
            let query = MonthQuery::new(&freelancer, &start, &end, category.as_deref())?;
            let source = file_source(&config)?;
            let days = query_month(&source, &query, as_of)
                .await
                .context("Failed to compute month availability")?;
            render(&days, cli.pretty)?
        }
        Commands::Day {
            freelancer,
            date,
            category,
        } => {
            let query = DayQuery::new(&freelancer, &date, category.as_deref())?;
            let source = file_source(&config)?;
            let listing = query_day(&source, &query, as_of)
                .await
                .context("Failed to list available slots")?;
            render(&listing, cli.pretty)?
        }
    };

    write_output(cli.output.as_deref(), &rendered)
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_as_of(raw: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM:SS: {}", e))
}

fn file_source(config: &Config) -> Result<FileSource> {
    let entries = config
        .entries_path
        .clone()
        .context("No entries file: pass --entries or set entries_path in the config")?;
    let bookings = config
        .bookings_path
        .clone()
        .context("No bookings file: pass --bookings or set bookings_path in the config")?;
    Ok(FileSource::new(entries, bookings))
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');
    Ok(json)
}

fn write_output(path: Option<&std::path::Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
