//! Increase schedule for calendar marking.
//!
//! Every exercise of a plan shares one calendar cadence: the longest
//! configured interval among the enabled exercises. Exercises with shorter
//! intervals still come due on their own dates (see [`crate::due`]), the
//! calendar just does not mark them.

use chrono::{Days, NaiveDate};
use overload_core::date::{add_months, weeks_to_days};
use overload_core::ProgressionPlan;
use crate::{ProgressionError, Result};

/// How far ahead of the plan's start date increases are marked.
pub const HORIZON_MONTHS: u32 = 6;

/// Check a plan can be scheduled.
///
/// Every exercise needs an interval of at least one week and at least one
/// exercise must be enabled.
pub fn validate_plan(plan: &ProgressionPlan) -> Result<()> {
    for (name, exercise) in &plan.exercises {
        if exercise.interval_weeks == 0 {
            return Err(ProgressionError::InvalidInterval { exercise: name.clone() });
        }
    }

    if plan.enabled_exercises().next().is_none() {
        return Err(ProgressionError::NoEnabledExercises { plan: plan.id.clone() });
    }

    Ok(())
}

/// Dates on which an increase is due within [`HORIZON_MONTHS`] of the plan's
/// start date, ascending and without duplicates.
pub fn increase_schedule(plan: &ProgressionPlan) -> Result<Vec<NaiveDate>> {
    validate_plan(plan)?;

    let max_interval = plan
        .enabled_exercises()
        .map(|(_, exercise)| exercise.interval_weeks)
        .max()
        .ok_or_else(|| ProgressionError::NoEnabledExercises { plan: plan.id.clone() })?;

    let step = Days::new(weeks_to_days(max_interval).unsigned_abs());
    let horizon = add_months(plan.start_date, HORIZON_MONTHS).unwrap_or(NaiveDate::MAX);

    let mut dates = Vec::new();
    let mut cursor = plan.start_date.checked_add_days(step);
    while let Some(date) = cursor.filter(|d| *d <= horizon) {
        dates.push(date);
        cursor = date.checked_add_days(step);
    }

    Ok(dates)
}
