//! Overload CLI - workout routines, progressive overload and session history.

mod commands;
mod parse;

use std::path::PathBuf;
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use overload_core::{DayExercise, SessionExercise, Time};
use overload_history::Metric;
use overload_progression::ExerciseSetup;
use overload_storage::JsonStorage;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "overload")]
#[command(about = "Workout routines with scheduled progressive overload", long_about = None)]
struct Cli {
    /// Directory holding the JSON documents
    #[arg(long, global = true, env = "OVERLOAD_DATA_DIR", default_value = ".overload")]
    data_dir: PathBuf,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_parser = parse::date)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage workout days
    #[command(subcommand)]
    Day(DayCommand),
    /// Manage bi-weekly workout plans
    #[command(subcommand)]
    Workout(WorkoutCommand),
    /// Select the workout plan being followed
    #[command(subcommand)]
    Current(CurrentCommand),
    /// Manage progressive overload plans
    #[command(subcommand)]
    Progression(ProgressionCommand),
    /// Show or tidy the calendar
    #[command(subcommand)]
    Calendar(CalendarCommand),
    /// Log and manage workout sessions
    #[command(subcommand)]
    Session(SessionCommand),
    /// Analyze logged sessions
    #[command(subcommand)]
    History(HistoryCommand),
}

#[derive(Subcommand)]
enum DayCommand {
    /// Create a workout day
    Add {
        /// Day name
        name: String,
        /// Emoji icon
        #[arg(long)]
        icon: Option<String>,
        /// Exercise as NAME[:SETS[:REPS[:WEIGHT[:REST]]]]
        #[arg(long = "exercise", short = 'e', value_parser = parse::day_exercise)]
        exercises: Vec<DayExercise>,
    },
    /// Update a workout day
    Edit {
        /// Day ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New icon
        #[arg(long)]
        icon: Option<String>,
        /// Replace the exercises with these
        #[arg(long = "exercise", short = 'e', value_parser = parse::day_exercise)]
        exercises: Vec<DayExercise>,
    },
    /// List workout days
    List,
    /// Show a workout day
    Show {
        /// Day ID
        id: String,
    },
    /// Delete a workout day
    Delete {
        /// Day ID
        id: String,
    },
}

#[derive(Subcommand)]
enum WorkoutCommand {
    /// Create an empty workout plan
    Create {
        /// Plan name
        name: String,
    },
    /// List workout plans
    List,
    /// Show a workout plan's schedule
    Show {
        /// Plan ID
        id: String,
    },
    /// Schedule a day (or rest) on one weekday
    Assign {
        /// Plan ID
        id: String,
        #[command(flatten)]
        slot: SlotArgs,
        /// Day ID; omit for a rest day
        #[arg(long)]
        day: Option<String>,
    },
    /// Unassign every day of a week
    ClearWeek {
        /// Plan ID
        id: String,
        /// Week (1 or 2)
        #[arg(long)]
        week: u8,
    },
    /// Rename a workout plan
    Rename {
        /// Plan ID
        id: String,
        /// New name
        name: String,
    },
    /// Delete a workout plan
    Delete {
        /// Plan ID
        id: String,
    },
}

#[derive(Args)]
struct SlotArgs {
    /// Week (1 or 2)
    #[arg(long)]
    week: u8,
    /// Weekday, 1 (Monday) to 7 (Sunday)
    #[arg(long)]
    weekday: u8,
}

#[derive(Subcommand)]
enum CurrentCommand {
    /// Follow a workout plan
    Set {
        /// Plan ID
        id: String,
    },
    /// Show the current workout plan
    Show,
    /// Stop following a plan
    Clear,
    /// Show today's scheduled day
    Today,
}

#[derive(Subcommand)]
enum ProgressionCommand {
    /// Create a plan for a scheduled workout day
    Create {
        /// Workout plan ID
        #[arg(long)]
        workout: String,
        /// Workout day ID
        #[arg(long)]
        day: String,
        /// Exercise as NAME[:VARIABLE[:AMOUNT[:WEEKS]]]
        #[arg(long = "exercise", short = 'e', required = true, value_parser = parse::setup)]
        exercises: Vec<(String, ExerciseSetup)>,
    },
    /// List progression plans
    List,
    /// Show a progression plan
    Show {
        /// Plan ID
        id: String,
    },
    /// Delete a progression plan
    Delete {
        /// Plan ID
        id: String,
    },
    /// Show increases due today
    Due,
    /// Apply the increases due today in a plan
    Apply {
        /// Plan ID
        id: String,
    },
    /// Defer the increases due today in a plan by one day
    Skip {
        /// Plan ID
        id: String,
    },
    /// Resume progression for an exercise
    Enable {
        /// Plan ID
        id: String,
        /// Exercise name
        exercise: String,
    },
    /// Pause progression for an exercise
    Disable {
        /// Plan ID
        id: String,
        /// Exercise name
        exercise: String,
    },
}

#[derive(Subcommand)]
enum CalendarCommand {
    /// List calendar entries
    List {
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Remove markers left by deleted progression plans
    Prune,
}

#[derive(Args, Default)]
struct RangeArgs {
    /// First date included
    #[arg(long, value_parser = parse::date)]
    from: Option<NaiveDate>,
    /// Last date included
    #[arg(long, value_parser = parse::date)]
    to: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum SessionCommand {
    /// Log a completed session
    Log {
        /// Workout plan ID
        #[arg(long)]
        workout: String,
        /// Workout day ID
        #[arg(long)]
        day: String,
        /// Session date (defaults to today)
        #[arg(long, value_parser = parse::date)]
        date: Option<NaiveDate>,
        /// Duration, e.g. "45 minutes"
        #[arg(long)]
        duration: Option<String>,
        /// Notes
        #[arg(long)]
        notes: Option<String>,
        /// Exercise as NAME[:SETS[:REPS[:WEIGHT[:REST]]]]
        #[arg(long = "exercise", short = 'e', value_parser = parse::session_exercise)]
        exercises: Vec<SessionExercise>,
    },
    /// List sessions
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Delete a session
    Delete {
        /// Session ID
        id: String,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Only this workout plan
    #[arg(long)]
    workout: Option<String>,
    /// Only this workout day
    #[arg(long)]
    day: Option<String>,
    #[command(flatten)]
    range: RangeArgs,
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// Sessions as a table, or CSV
    Sheet {
        #[command(flatten)]
        filter: FilterArgs,
        /// Write CSV to stdout
        #[arg(long)]
        csv: bool,
    },
    /// Max weight and count per exercise
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Totals and covered dates
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Sessions grouped by workout day
    Days {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// One metric per exercise of a day over time
    Chart {
        /// Workout day ID
        #[arg(long)]
        day: String,
        /// weight, reps, volume or recovery
        #[arg(long, default_value = "weight")]
        metric: Metric,
    },
    /// Session count and weight trend of a day
    Performance {
        /// Workout day ID
        #[arg(long)]
        day: String,
    },
}

/// The date and time commands run at.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Clock {
    /// Calendar date used for due checks
    pub(crate) today: NaiveDate,
    /// Timestamp written to records
    pub(crate) now: Time,
}

impl Clock {
    fn new(today: Option<NaiveDate>) -> Self {
        let now = Utc::now();
        match today {
            Some(today) => Self {
                today,
                now: today.and_time(now.time()).and_utc(),
            },
            None => Self { today: now.date_naive(), now },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let clock = Clock::new(cli.today);

    // Open storage
    let storage = JsonStorage::new(&cli.data_dir).await?;
    debug!(data_dir = %cli.data_dir.display(), today = %clock.today, "Starting");

    match cli.command {
        Commands::Day(cmd) => commands::routine::day(storage, cmd, clock).await,
        Commands::Workout(cmd) => commands::routine::workout(storage, cmd, clock).await,
        Commands::Current(cmd) => commands::routine::current(storage, cmd, clock).await,
        Commands::Progression(cmd) => commands::progression::progression(storage, cmd, clock).await,
        Commands::Calendar(cmd) => commands::progression::calendar(storage, cmd).await,
        Commands::Session(cmd) => commands::history::session(storage, cmd, clock).await,
        Commands::History(cmd) => commands::history::history(storage, cmd).await,
    }
}
