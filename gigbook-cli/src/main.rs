mod commands;
mod render;
mod summary;
mod workspace;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use gigbook_core::calendar::MonthRef;
use gigbook_core::config::GigbookConfig;
use gigbook_core::dates::{parse_date, parse_time};
use gigbook_core::query::FilterSpec;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::conflicts::Proposed;
use crate::commands::list::{Page, parse_facet};
use crate::workspace::Workspace;

#[derive(Parser)]
#[command(name = "gigbook")]
#[command(version, about = "Browse clients, projects, payments and your calendar from the terminal")]
struct Cli {
    /// Workspace snapshot (JSON) to read instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Config file to use instead of ~/.config/gigbook/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filtered listing of one record type
    List {
        page: Page,

        /// Free-text search across the page's text fields
        #[arg(short, long, default_value = "")]
        query: String,

        /// Facet filter, e.g. --facet status=Active (repeatable)
        #[arg(long = "facet", value_parser = parse_facet)]
        facets: Vec<(String, String)>,
    },
    /// Month grid with event markers
    Month {
        /// Month to show (YYYY-MM), defaults to the month containing today
        #[arg(short, long, value_parser = parse_month)]
        month: Option<MonthRef>,

        /// Reference date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day)]
        today: Option<NaiveDate>,
    },
    /// Today, this week and upcoming events
    Agenda {
        /// Reference date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day)]
        today: Option<NaiveDate>,

        /// Maximum number of upcoming events
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Events due within the next few days
    Deadlines {
        /// Reference date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day)]
        today: Option<NaiveDate>,

        /// How many days ahead to look
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Check a proposed slot against the calendar
    Conflicts {
        /// Date of the slot (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day)]
        date: NaiveDate,

        /// Start time (HH:MM)
        #[arg(long, value_parser = parse_clock)]
        time: NaiveTime,

        /// Length in minutes
        #[arg(long, default_value_t = 60)]
        duration: u32,
    },
    /// Show config paths and effective settings
    Config,
}

fn parse_month(s: &str) -> Result<MonthRef, String> {
    MonthRef::parse(s).map_err(|e| e.to_string())
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

fn parse_clock(s: &str) -> Result<NaiveTime, String> {
    parse_time(s).map_err(|e| e.to_string())
}

fn init_logging(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    let Cli {
        file,
        config: config_path,
        json_logs,
        command,
    } = Cli::parse();
    init_logging(json_logs);

    let config = match &config_path {
        Some(path) => GigbookConfig::load_from(path)?,
        None => GigbookConfig::load()?,
    };
    let load_workspace = || Workspace::load(file.as_deref(), &config);
    let local_today = chrono::Local::now().date_naive();

    match command {
        Commands::List { page, query, facets } => {
            let spec = facets
                .into_iter()
                .fold(FilterSpec::new().with_query(query), |spec, (name, value)| {
                    spec.with_facet(name, value)
                });
            commands::list::run(&load_workspace()?, page, &spec)
        }
        Commands::Month { month, today } => {
            let today = today.unwrap_or(local_today);
            let month = match month {
                Some(month) => month,
                None => MonthRef::containing(today)?,
            };
            let events = load_workspace()?.calendar_events(today, &config.recurrence);
            commands::month::run(&events, month, today)
        }
        Commands::Agenda { today, limit } => {
            let today = today.unwrap_or(local_today);
            let events = load_workspace()?.calendar_events(today, &config.recurrence);
            commands::agenda::run(&events, today, limit.unwrap_or(config.upcoming_limit))
        }
        Commands::Deadlines { today, days } => {
            let today = today.unwrap_or(local_today);
            let events = load_workspace()?.calendar_events(today, &config.recurrence);
            commands::deadlines::run(&events, today, days.unwrap_or(config.deadline_days))
        }
        Commands::Conflicts { date, time, duration } => {
            let events = load_workspace()?.calendar_events(date, &config.recurrence);
            commands::conflicts::run(&events, Proposed { date, time, duration })
        }
        Commands::Config => commands::config::run(&config),
    }
}
