// ABOUTME: GymGo CLI - log workouts and compare program weeks from the terminal
// ABOUTME: Renders the today, progress, week and technique screens and records sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Today's workout (scheduled day for today's weekday)
//! gymgo today
//!
//! # Another date, another routine day, or the next scheduled workout
//! gymgo today --date 2026-01-12 --day lower
//! gymgo today --next
//!
//! # Log sets: <kg>x<reps>[@<rir>], "-" for a blank set
//! gymgo log bench 60x8@2 62,5x8@1 62.5x7
//!
//! # Log one half of a giant set, or both at once
//! gymgo log arms 20x12 20x10 --part b
//! gymgo log-both arms --a 20x12 20x11 --b 25x10 25x9
//!
//! # Week-over-week comparison
//! gymgo progress bench --metric vol
//!
//! # Plan, techniques, settings
//! gymgo week
//! gymgo techniques rest_pause
//! gymgo settings set-start 2026-01-09
//!
//! # Pre-cache the app shell from a remote scope and resolve data documents
//! gymgo cache https://gym.example/app/ data/routine.json
//! ```

mod commands;
mod helpers;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use gymgo::{
    config::environment::{AppConfig, ContentSource, DatabaseUrl},
    database_plugins::factory::Database,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    screens::settings::{ensure_start_date, parse_start_date},
};
use gymgo_core::models::MovementLabel;
use gymgo_intelligence::Metric;
use std::path::PathBuf;
use tracing::{debug, info};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "gymgo",
    version,
    about = "GymGo workout log",
    long_about = "Log sets against a multi-week routine and compare weeks with an estimated one-rep max."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (sqlite:<path>, sqlite::memory:, memory:)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Directory holding routine.json and techniques.json
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Remote app scope to fetch data/*.json from
    #[arg(long, global = true, conflicts_with = "content_dir")]
    content_url: Option<String>,

    /// Program length override in weeks
    #[arg(long, global = true)]
    weeks_total: Option<u32>,

    /// Print view models as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the workout for a date
    Today {
        /// Date to show (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Routine day id, defaults to the scheduled day
        #[arg(long)]
        day: Option<String>,

        /// Jump to the next scheduled workout after the selected day
        #[arg(long)]
        next: bool,
    },

    /// Record the sets of one exercise (replaces what was logged that date)
    Log {
        /// Exercise id from the routine
        exercise: String,

        /// Sets as <kg>x<reps>[@<rir>]; "-" for a blank set
        #[arg(num_args = 1.., allow_hyphen_values = true)]
        sets: Vec<String>,

        /// Date of the session (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Routine day id, defaults to the scheduled day
        #[arg(long)]
        day: Option<String>,

        /// Movement of a composite exercise
        #[arg(long, value_enum)]
        part: Option<PartArg>,
    },

    /// Record both movements of a composite exercise
    LogBoth {
        /// Composite exercise id
        exercise: String,

        /// Sets of movement A
        #[arg(long = "a", num_args = 1.., required = true, allow_hyphen_values = true)]
        sets_a: Vec<String>,

        /// Sets of movement B
        #[arg(long = "b", num_args = 1.., required = true, allow_hyphen_values = true)]
        sets_b: Vec<String>,

        /// Date of the session (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Routine day id, defaults to the scheduled day
        #[arg(long)]
        day: Option<String>,
    },

    /// Compare program weeks of one exercise
    Progress {
        /// Exercise or movement id, defaults to the first exercise
        exercise: Option<String>,

        /// Metric to compare
        #[arg(long, default_value = "e1rm")]
        metric: Metric,
    },

    /// Show the weekly plan
    Week,

    /// List techniques, or show one
    Techniques {
        /// Technique id
        id: Option<String>,
    },

    /// Program settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Install the offline shell from a remote scope and resolve paths through it
    Cache {
        /// App scope URL
        scope: String,

        /// Paths relative to the scope to request after install
        paths: Vec<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SettingsCommand {
    /// Show current settings
    Show,

    /// Set the program start date (YYYY-MM-DD)
    SetStart {
        /// First day of week 1
        date: String,
    },
}

/// Composite movement selector
#[derive(Clone, Copy, ValueEnum)]
enum PartArg {
    A,
    B,
}

impl From<PartArg> for MovementLabel {
    fn from(part: PartArg) -> Self {
        match part {
            PartArg::A => Self::A,
            PartArg::B => Self::B,
        }
    }
}

/// Resolved runtime context shared by commands
pub struct Context {
    pub config: AppConfig,
    pub database: Database,
    pub today: NaiveDate,
    pub json: bool,
}

fn parse_date_arg(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    raw.map_or(Ok(today), parse_start_date)
}

fn apply_overrides(mut config: AppConfig, cli: &Cli) -> Result<AppConfig> {
    if let Some(url) = &cli.database_url {
        config.database = DatabaseUrl::parse_url(url)?;
    }
    if let Some(dir) = &cli.content_dir {
        config.content = ContentSource::Directory(dir.clone());
    }
    if let Some(url) = &cli.content_url {
        config.content = ContentSource::remote(url)?;
    }
    if cli.weeks_total.is_some() {
        config.weeks_total = cli.weeks_total;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env()
        .verbose(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let config = apply_overrides(AppConfig::from_env()?, &cli)?;
    debug!("{}", config.summary());

    let database = Database::new(&config.database).await?;
    info!("{}", database.backend_info());

    let today = Local::now().date_naive();
    ensure_start_date(&database, today).await?;

    let ctx = Context {
        config,
        database,
        today,
        json: cli.json,
    };

    match cli.command {
        Command::Today { date, day, next } => {
            let date = parse_date_arg(date.as_deref(), today)?;
            commands::today::show(&ctx, date, day, next).await?;
        }
        Command::Log {
            exercise,
            sets,
            date,
            day,
            part,
        } => {
            let date = parse_date_arg(date.as_deref(), today)?;
            commands::log::record(&ctx, &exercise, &sets, date, day, part.map(Into::into))
                .await?;
        }
        Command::LogBoth {
            exercise,
            sets_a,
            sets_b,
            date,
            day,
        } => {
            let date = parse_date_arg(date.as_deref(), today)?;
            commands::log::record_both(&ctx, &exercise, &sets_a, &sets_b, date, day).await?;
        }
        Command::Progress { exercise, metric } => {
            commands::progress::show(&ctx, exercise.as_deref(), metric).await?;
        }
        Command::Week => {
            commands::plan::week(&ctx).await?;
        }
        Command::Techniques { id } => {
            commands::plan::techniques(&ctx, id.as_deref()).await?;
        }
        Command::Settings { action } => match action {
            SettingsCommand::Show => commands::settings::show(&ctx).await?,
            SettingsCommand::SetStart { date } => {
                commands::settings::set_start(&ctx, &date).await?;
            }
        },
        Command::Cache { scope, paths } => {
            commands::cache::warm(&ctx, &scope, &paths).await?;
        }
    }

    Ok(())
}
