//! Argument value parsers.

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use overload_core::{DayExercise, ProgressionVariable, SessionExercise};
use overload_progression::ExerciseSetup;

/// `YYYY-MM-DD`.
pub fn date(s: &str) -> Result<NaiveDate> {
    overload_core::date::parse_date(s).with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", s))
}

/// `NAME[:SETS[:REPS[:WEIGHT[:REST]]]]`; omitted fields take the day defaults.
pub fn day_exercise(s: &str) -> Result<DayExercise> {
    let mut parts = s.split(':');
    let name = required(parts.next(), s)?;
    let mut exercise = DayExercise::new(name);

    if let Some(sets) = field(parts.next()) {
        exercise.sets = Some(sets.parse().with_context(|| format!("invalid sets in '{}'", s))?);
    }
    if let Some(reps) = field(parts.next()) {
        exercise.reps = Some(reps.parse().with_context(|| format!("invalid reps in '{}'", s))?);
    }
    if let Some(weight) = field(parts.next()) {
        exercise.weight = Some(number(weight, s)?);
    }
    if let Some(rest) = field(parts.next()) {
        exercise.rest = Some(rest.parse().with_context(|| format!("invalid rest in '{}'", s))?);
    }
    if parts.next().is_some() {
        bail!("too many fields in '{}'", s);
    }
    Ok(exercise)
}

/// `NAME:SETS:REPS[:WEIGHT[:REST]]` as performed.
pub fn session_exercise(s: &str) -> Result<SessionExercise> {
    let planned = day_exercise(s)?;
    Ok(SessionExercise {
        name: planned.name,
        sets: planned.sets,
        reps: planned.reps,
        weight: planned.weight,
        rest: planned.rest,
    })
}

/// `NAME[:VARIABLE[:AMOUNT[:WEEKS]]]`, defaulting to +5 weight every 2 weeks.
pub fn setup(s: &str) -> Result<(String, ExerciseSetup)> {
    let mut parts = s.split(':');
    let name = required(parts.next(), s)?;
    let mut setup = ExerciseSetup::default();

    if let Some(variable) = field(parts.next()) {
        setup.variable = variable.parse::<ProgressionVariable>()?;
    }
    if let Some(amount) = field(parts.next()) {
        setup.increase_amount = number(amount, s)?;
    }
    if let Some(weeks) = field(parts.next()) {
        setup.interval_weeks =
            weeks.parse().with_context(|| format!("invalid interval in '{}'", s))?;
    }
    if parts.next().is_some() {
        bail!("too many fields in '{}'", s);
    }
    Ok((name.to_string(), setup))
}

fn required<'a>(part: Option<&'a str>, whole: &str) -> Result<&'a str> {
    field(part).ok_or_else(|| anyhow!("missing exercise name in '{}'", whole))
}

fn field(part: Option<&str>) -> Option<&str> {
    part.map(str::trim).filter(|p| !p.is_empty())
}

fn number(value: &str, whole: &str) -> Result<f64> {
    let n: f64 = value.parse().with_context(|| format!("invalid number in '{}'", whole))?;
    if !n.is_finite() {
        bail!("invalid number in '{}'", whole);
    }
    Ok(n)
}
