//! Progression and calendar commands.

use std::collections::BTreeMap;
use anyhow::Result;
use overload_core::{DayId, ProgressionPlan, ProgressionPlanId, WorkoutId};
use overload_progression::{increase_schedule, BasicProgressionService, ProgressionService};
use overload_storage::JsonStorage;
use crate::{CalendarCommand, Clock, ProgressionCommand};

pub(crate) async fn progression(
    storage: JsonStorage,
    cmd: ProgressionCommand,
    clock: Clock,
) -> Result<()> {
    let mut service = BasicProgressionService::new(storage);

    match cmd {
        ProgressionCommand::Create { workout, day, exercises } => {
            let setups: BTreeMap<_, _> = exercises.into_iter().collect();
            let saved = service
                .create_plan(&WorkoutId::from(workout), &DayId::from(day), &setups, clock.now)
                .await?;
            if let Some(replaced) = &saved.replaced {
                println!("Replaced progression plan {}", replaced);
            }
            println!(
                "Saved progression plan: {} - {} ({} increase dates marked)",
                saved.plan.id,
                saved.plan.day_name,
                saved.schedule.len()
            );
        }
        ProgressionCommand::List => {
            let plans = service.list_plans().await?;
            if plans.is_empty() {
                println!("No progression plans yet.");
            }
            for plan in plans {
                println!(
                    "  {} | {} / {} | {} of {} exercises enabled",
                    plan.id,
                    plan.workout_name,
                    plan.day_name,
                    plan.enabled_exercises().count(),
                    plan.exercises.len()
                );
            }
        }
        ProgressionCommand::Show { id } => {
            let plan = service.get_plan(&ProgressionPlanId::from(id)).await?;
            print_plan(&plan);
        }
        ProgressionCommand::Delete { id } => {
            let plan = service.delete_plan(&ProgressionPlanId::from(id)).await?;
            println!("Deleted progression plan for {}", plan.day_name);
        }
        ProgressionCommand::Due => {
            let due = service.due_today(clock.today).await?;
            if due.is_empty() {
                println!("No progressions due on {}", clock.today);
            }
            for plan in &due {
                println!("{} ({}) - {}", plan.day_name, plan.workout_name, plan.id);
                for name in plan.due_exercises(clock.today) {
                    let exercise = &plan.exercises[name];
                    println!(
                        "  {}: {} -> {} {}",
                        name,
                        exercise.current_value,
                        exercise.current_value + exercise.increase_amount,
                        exercise.variable.unit()
                    );
                }
            }
        }
        ProgressionCommand::Apply { id } => {
            let report = service
                .apply_due(&ProgressionPlanId::from(id), clock.today, clock.now)
                .await?;
            if report.is_empty() {
                println!("Nothing due on {}", clock.today);
            }
            for applied in &report.applied {
                println!(
                    "  {}: {} -> {} (next {})",
                    applied.exercise,
                    applied.previous_value,
                    applied.current_value,
                    applied.next_increase_date
                );
            }
            for failed in &report.failed {
                println!("  {}: not applied, {}", failed.exercise, failed.reason);
            }
        }
        ProgressionCommand::Skip { id } => {
            let skipped = service
                .skip_due(&ProgressionPlanId::from(id), clock.today, clock.now)
                .await?;
            if skipped.is_empty() {
                println!("Nothing due on {}", clock.today);
            } else {
                println!("Deferred to tomorrow: {}", skipped.join(", "));
            }
        }
        ProgressionCommand::Enable { id, exercise } => {
            service
                .set_exercise_enabled(&ProgressionPlanId::from(id), &exercise, true, clock.now)
                .await?;
            println!("Enabled progression for {}", exercise);
        }
        ProgressionCommand::Disable { id, exercise } => {
            service
                .set_exercise_enabled(&ProgressionPlanId::from(id), &exercise, false, clock.now)
                .await?;
            println!("Disabled progression for {}", exercise);
        }
    }

    Ok(())
}

pub(crate) async fn calendar(storage: JsonStorage, cmd: CalendarCommand) -> Result<()> {
    let mut service = BasicProgressionService::new(storage);

    match cmd {
        CalendarCommand::List { range } => {
            let entries = service.calendar_entries().await?;
            let shown: Vec<_> = entries
                .iter()
                .filter(|e| range.from.map_or(true, |from| e.date >= from))
                .filter(|e| range.to.map_or(true, |to| e.date <= to))
                .collect();
            if shown.is_empty() {
                println!("No calendar entries.");
            }
            for entry in shown {
                let marker = if entry.progression_increase { "+" } else { " " };
                let plan = entry.progression_plan_id.as_ref().map_or("-", |id| id.as_str());
                println!("{} {} | {} | {}", marker, entry.date, entry.entry_type, plan);
            }
        }
        CalendarCommand::Prune => {
            let changed = service.prune_calendar().await?;
            println!("Removed {} stale markers", changed);
        }
    }

    Ok(())
}

fn print_plan(plan: &ProgressionPlan) {
    println!("{} / {} ({})", plan.workout_name, plan.day_name, plan.id);
    println!("  Started {}", plan.start_date);
    for (name, exercise) in &plan.exercises {
        println!(
            "  {}{} | {} {} | +{} every {} weeks | next {}",
            name,
            if exercise.enabled { "" } else { " (paused)" },
            exercise.current_value,
            exercise.variable.unit(),
            exercise.increase_amount,
            exercise.interval_weeks,
            exercise.next_increase_date
        );
    }
    if let Ok(schedule) = increase_schedule(plan) {
        let dates: Vec<String> = schedule.iter().map(|d| d.to_string()).collect();
        println!("  Increase dates: {}", dates.join(", "));
    }
}
