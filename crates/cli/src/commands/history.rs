//! Session and history commands.

use anyhow::Result;
use overload_core::{DayId, SessionId, WorkoutId, WorkoutSession};
use overload_history::{
    day_performance, exercise_stats, group_by_day, metric_series, summarize, BasicSessionLog,
    SessionFilter, SessionLog, Spreadsheet,
};
use overload_routine::{BasicRoutineLibrary, RoutineLibrary};
use overload_storage::JsonStorage;
use crate::{Clock, FilterArgs, HistoryCommand, SessionCommand};

impl FilterArgs {
    fn to_filter(&self) -> SessionFilter {
        SessionFilter {
            workout_id: self.workout.clone().map(WorkoutId::from),
            day_id: self.day.clone().map(DayId::from),
            from: self.range.from,
            to: self.range.to,
        }
    }
}

pub(crate) async fn session(storage: JsonStorage, cmd: SessionCommand, clock: Clock) -> Result<()> {
    match cmd {
        SessionCommand::Log { workout, day, date, duration, notes, exercises } => {
            let library = BasicRoutineLibrary::new(storage.clone());
            let workout = library.get_plan(&WorkoutId::from(workout)).await?;
            let day = library.get_day(&DayId::from(day)).await?;

            let session = WorkoutSession {
                id: SessionId::new(),
                workout_id: workout.id,
                day_id: day.id,
                day_name: day.name,
                date: date.unwrap_or(clock.today),
                duration,
                notes,
                exercises,
            };
            let session = BasicSessionLog::new(storage).log_session(session).await?;
            println!(
                "Logged session: {} - {} on {} ({} exercises)",
                session.id,
                session.day_name,
                session.date,
                session.exercises.len()
            );
        }
        SessionCommand::List { filter } => {
            let sessions = BasicSessionLog::new(storage).sessions(&filter.to_filter()).await?;
            if sessions.is_empty() {
                println!("No sessions logged.");
            }
            for session in sessions {
                println!(
                    "  {} | {} | {} | {} exercises",
                    session.id,
                    session.date,
                    session.day_name,
                    session.exercises.len()
                );
            }
        }
        SessionCommand::Delete { id } => {
            let session = BasicSessionLog::new(storage)
                .delete_session(&SessionId::from(id))
                .await?;
            println!("Deleted session on {}", session.date);
        }
    }

    Ok(())
}

pub(crate) async fn history(storage: JsonStorage, cmd: HistoryCommand) -> Result<()> {
    let log = BasicSessionLog::new(storage);

    match cmd {
        HistoryCommand::Sheet { filter, csv } => {
            let sessions = log.sessions(&filter.to_filter()).await?;
            let refs: Vec<&WorkoutSession> = sessions.iter().collect();
            let sheet = Spreadsheet::from_sessions(&refs);
            if csv {
                print!("{}", sheet.to_csv());
            } else if sheet.is_empty() {
                println!("No data available");
            } else {
                println!("{}", sheet.header.join(" | "));
                for row in &sheet.rows {
                    println!("{}", row.join(" | "));
                }
            }
        }
        HistoryCommand::Stats { filter } => {
            let sessions = log.sessions(&filter.to_filter()).await?;
            let refs: Vec<&WorkoutSession> = sessions.iter().collect();
            println!("Workouts: {}", refs.len());
            for stats in exercise_stats(&refs) {
                println!("  {} max {} ({} sessions)", stats.name, stats.max_weight, stats.count);
            }
        }
        HistoryCommand::Summary { filter } => {
            let sessions = log.sessions(&filter.to_filter()).await?;
            let refs: Vec<&WorkoutSession> = sessions.iter().collect();
            let summary = summarize(&refs);
            println!("Total workouts: {}", summary.sessions);
            println!("Total exercises: {}", summary.exercises);
            match (summary.first, summary.last) {
                (Some(first), Some(last)) => println!("Date range: {} - {}", first, last),
                _ => println!("Date range: -"),
            }
        }
        HistoryCommand::Days { filter } => {
            let sessions = log.sessions(&filter.to_filter()).await?;
            let refs: Vec<&WorkoutSession> = sessions.iter().collect();
            for group in group_by_day(&refs) {
                let last = group.sessions.last().map(|s| s.date.to_string()).unwrap_or_default();
                println!(
                    "  {} ({}) | {} sessions | last {}",
                    group.day_name,
                    group.day_id,
                    group.sessions.len(),
                    last
                );
            }
        }
        HistoryCommand::Chart { day, metric } => {
            let sessions = log.sessions(&SessionFilter::default()).await?;
            let refs: Vec<&WorkoutSession> = sessions.iter().collect();
            let chart = metric_series(&refs, &DayId::from(day), metric);
            println!("{}", metric.label());
            if chart.series.is_empty() {
                println!("  No data yet");
            }
            for series in &chart.series {
                let points: Vec<String> = series
                    .points
                    .iter()
                    .map(|(date, value)| format!("{} {}", date, value))
                    .collect();
                println!("  {}: {}", series.exercise, points.join(", "));
            }
        }
        HistoryCommand::Performance { day } => {
            let sessions = log.sessions(&SessionFilter::default()).await?;
            let refs: Vec<&WorkoutSession> = sessions.iter().collect();
            let performance = day_performance(&refs, &DayId::from(day));
            println!("Sessions: {}", performance.sessions);
            match performance.weight_change_percent {
                _ if performance.sessions == 0 => println!("No data yet"),
                Some(change) if change > 0.0 => println!("↑ {:.0}% weight increase", change),
                Some(change) if change < 0.0 => println!("↓ {:.0}% weight decrease", -change),
                _ => println!("Steady progress"),
            }
        }
    }

    Ok(())
}
