//! CLI commands implementation.

use std::path::PathBuf;

use chrono::{FixedOffset, Utc};
use clap::{Parser, Subcommand};
use console::style;

use tripview::config::DisplayConfig;
use tripview::format::{
    format_date, format_date_range, format_duration, format_list, format_number, format_time,
    parse_offset,
};
use tripview::models::Trip;
use tripview::sanitize::sanitize_json;

use super::helpers::{local_instant, parse_filter, parse_number, read_input, render_trip};

#[derive(Parser)]
#[command(name = "tripview")]
#[command(about = "Format and render trip itinerary markup")]
#[command(version)]
pub struct Cli {
    /// Config file (discovered automatically when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// UTC offset for naive timestamps and display, e.g. +02:00
    #[arg(long, global = true, allow_hyphen_values = true)]
    offset: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Format a date as "D MMM"
    Date {
        instant: String,
        /// Day of month only
        #[arg(long)]
        narrow: bool,
    },

    /// Format a time of day as "HH:mm"
    Time { instant: String },

    /// Format a date range
    Range { from: String, to: String },

    /// Format the time elapsed between two instants
    Duration { from: String, to: String },

    /// Format a number with thousands separators
    Number {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Format a route-style list
    List { items: Vec<String> },

    /// Escape every string in a JSON document ("-" reads stdin)
    Sanitize { json: String },

    /// Render trip markup from a JSON trip file ("-" reads stdin)
    Render {
        file: String,
        /// Filter to apply (everything, future, present, past)
        #[arg(short, long)]
        filter: Option<String>,
        /// Instant filters are evaluated at (defaults to now)
        #[arg(long)]
        now: Option<String>,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DisplayConfig::load_from_path(path).await?.with_env_overrides(),
        None => DisplayConfig::load().await,
    };
    let offset = match &cli.offset {
        Some(text) => parse_offset(text)?,
        None => config.offset()?,
    };

    match cli.command {
        Commands::Date { instant, narrow } => {
            println!("{}", format_date(&local_instant(&instant, offset)?, narrow));
        }
        Commands::Time { instant } => {
            println!("{}", format_time(&local_instant(&instant, offset)?));
        }
        Commands::Range { from, to } => {
            let from = local_instant(&from, offset)?;
            let to = local_instant(&to, offset)?;
            println!("{}", format_date_range(&from, &to));
        }
        Commands::Duration { from, to } => {
            let from = local_instant(&from, offset)?;
            let to = local_instant(&to, offset)?;
            println!("{}", format_duration(&from, &to)?);
        }
        Commands::Number { value } => cmd_number(&value)?,
        Commands::List { items } => println!("{}", format_list(&items)),
        Commands::Sanitize { json } => cmd_sanitize(&json)?,
        Commands::Render { file, filter, now } => {
            cmd_render(&config, offset, &file, filter.as_deref(), now.as_deref())?
        }
    }

    Ok(())
}

fn cmd_number(value: &str) -> anyhow::Result<()> {
    println!("{}", format_number(parse_number(value)?));
    Ok(())
}

fn cmd_sanitize(source: &str) -> anyhow::Result<()> {
    let value: serde_json::Value = serde_json::from_str(&read_input(source)?)?;
    println!("{}", serde_json::to_string_pretty(&sanitize_json(&value))?);
    Ok(())
}

fn cmd_render(
    config: &DisplayConfig,
    offset: FixedOffset,
    source: &str,
    filter: Option<&str>,
    now: Option<&str>,
) -> anyhow::Result<()> {
    let value: serde_json::Value = serde_json::from_str(&read_input(source)?)?;
    let trip = Trip::from_json(&value, offset)?;

    let filter = match filter {
        Some(name) => parse_filter(name)?,
        None => config.default_filter()?,
    };
    let now = match now {
        Some(text) => local_instant(text, offset)?,
        None => Utc::now().with_timezone(&offset),
    };
    tracing::info!(
        "Rendering {} points with filter {} at {}",
        trip.points.len(),
        filter.as_str(),
        now
    );

    if trip.is_empty() {
        eprintln!("{} Trip has no points", style("!").yellow());
    }
    println!("{}", render_trip(config, &trip, filter, &now)?);

    Ok(())
}
