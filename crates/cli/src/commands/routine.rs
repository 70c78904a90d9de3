//! Day, workout and current-workout commands.

use anyhow::Result;
use overload_core::{DayId, WorkoutDay, WorkoutId, WorkoutPlan, DAYS_PER_WEEK};
use overload_routine::{BasicRoutineLibrary, RoutineLibrary};
use overload_storage::JsonStorage;
use super::slot_label;
use crate::{Clock, CurrentCommand, DayCommand, WorkoutCommand};

const WEEKDAYS: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub(crate) async fn day(storage: JsonStorage, cmd: DayCommand, clock: Clock) -> Result<()> {
    let mut library = BasicRoutineLibrary::new(storage);

    match cmd {
        DayCommand::Add { name, icon, exercises } => {
            let mut day = WorkoutDay::new(name, exercises);
            day.icon = icon;
            let day = library.save_day(day, clock.now).await?;
            println!(
                "Saved day: {} - {} ({} exercises)",
                day.id,
                day.name,
                day.exercises.len()
            );
        }
        DayCommand::Edit { id, name, icon, exercises } => {
            let mut day = library.get_day(&DayId::from(id)).await?;
            if let Some(name) = name {
                day.name = name;
            }
            if icon.is_some() {
                day.icon = icon;
            }
            if !exercises.is_empty() {
                day.exercises = exercises;
            }
            let day = library.save_day(day, clock.now).await?;
            println!("Updated day: {} - {}", day.id, day.name);
        }
        DayCommand::List => {
            let days = library.list_days().await?;
            if days.is_empty() {
                println!("No saved days yet.");
            }
            for day in days {
                println!(
                    "  {} | {} {} | {} exercises",
                    day.id,
                    day.icon_or_default(),
                    day.name,
                    day.exercises.len()
                );
            }
        }
        DayCommand::Show { id } => {
            let day = library.get_day(&DayId::from(id)).await?;
            println!("{} {} ({})", day.icon_or_default(), day.name, day.id);
            for exercise in &day.exercises {
                println!(
                    "  {} | {} x {} | {} lbs | rest {}s{}",
                    exercise.name,
                    show(exercise.sets),
                    show(exercise.reps),
                    show(exercise.weight),
                    show(exercise.rest),
                    if exercise.notes.is_empty() {
                        String::new()
                    } else {
                        format!(" | {}", exercise.notes)
                    }
                );
            }
        }
        DayCommand::Delete { id } => {
            let day = library.delete_day(&DayId::from(id)).await?;
            println!("Deleted day: {}", day.name);
        }
    }

    Ok(())
}

pub(crate) async fn workout(storage: JsonStorage, cmd: WorkoutCommand, clock: Clock) -> Result<()> {
    let mut library = BasicRoutineLibrary::new(storage);

    match cmd {
        WorkoutCommand::Create { name } => {
            let plan = library.create_plan(&name, clock.now).await?;
            println!("Created workout plan: {} - {}", plan.id, plan.name);
        }
        WorkoutCommand::List => {
            let plans = library.list_plans().await?;
            let current = library.current().await?.map(|p| p.id);
            if plans.is_empty() {
                println!("No workout plans yet.");
            }
            for plan in plans {
                let marker = if current.as_ref() == Some(&plan.id) { "*" } else { " " };
                println!(
                    "{} {} | {} | {} days | {}",
                    marker,
                    plan.id,
                    plan.name,
                    plan.workout_day_count(),
                    plan.days_summary()
                );
            }
        }
        WorkoutCommand::Show { id } => {
            let id = WorkoutId::from(id);
            let plan = library.get_plan(&id).await?;
            print_schedule(&plan);
            for day in library.unique_days(&id).await? {
                println!("  {} {} ({}) | {} exercises", day.icon_or_default(), day.name, day.id, day.exercises.len());
            }
        }
        WorkoutCommand::Assign { id, slot, day } => {
            let day = day.map(DayId::from);
            let plan = library
                .assign_slot(&WorkoutId::from(id), slot.week, slot.weekday, day.as_ref(), clock.now)
                .await?;
            print_schedule(&plan);
        }
        WorkoutCommand::ClearWeek { id, week } => {
            let plan = library.clear_week(&WorkoutId::from(id), week, clock.now).await?;
            print_schedule(&plan);
        }
        WorkoutCommand::Rename { id, name } => {
            let plan = library.rename(&WorkoutId::from(id), &name, clock.now).await?;
            println!("Renamed workout plan: {} - {}", plan.id, plan.name);
        }
        WorkoutCommand::Delete { id } => {
            let plan = library.delete_plan(&WorkoutId::from(id)).await?;
            println!("Deleted workout plan: {}", plan.name);
        }
    }

    Ok(())
}

pub(crate) async fn current(storage: JsonStorage, cmd: CurrentCommand, clock: Clock) -> Result<()> {
    let mut library = BasicRoutineLibrary::new(storage);

    match cmd {
        CurrentCommand::Set { id } => {
            let plan = library.set_current(&WorkoutId::from(id)).await?;
            println!("Current workout: {} ({})", plan.name, plan.days_summary());
        }
        CurrentCommand::Show => match library.current().await? {
            Some(plan) => print_schedule(&plan),
            None => println!("No current workout selected."),
        },
        CurrentCommand::Clear => {
            library.clear_current().await?;
            println!("Cleared current workout.");
        }
        CurrentCommand::Today => match library.todays_slot(clock.today).await? {
            Some(slot) => println!("{}: {}", clock.today, slot_label(Some(&slot))),
            None => println!("{}: nothing scheduled", clock.today),
        },
    }

    Ok(())
}

fn print_schedule(plan: &WorkoutPlan) {
    println!("{} ({})", plan.name, plan.id);
    println!("  {}", plan.days_summary());
    for (week, slots) in plan.schedule.chunks(DAYS_PER_WEEK).enumerate() {
        let cells: Vec<String> = WEEKDAYS
            .iter()
            .zip(slots)
            .map(|(name, slot)| format!("{} {}", name, slot_label(slot.as_ref())))
            .collect();
        println!("  Week {}: {}", week + 1, cells.join(" | "));
    }
}

fn show<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
