//! Locating days in the bi-weekly schedule.

use chrono::{Datelike, NaiveDate};
use overload_core::date::week_start;
use overload_core::{ScheduleSlot, WorkoutPlan, DAYS_PER_WEEK};
use crate::{Result, RoutineError};

/// One of the two schedule weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Week {
    /// Slots 0..7
    First,
    /// Slots 7..14
    Second,
}

impl Week {
    /// Parse a 1-based week number.
    pub fn from_number(week: u8) -> Result<Self> {
        match week {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            other => Err(RoutineError::InvalidWeek(other)),
        }
    }

    fn offset(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => DAYS_PER_WEEK,
        }
    }
}

/// Schedule index of a 1-based weekday (1 = Monday) in `week`.
pub fn slot_index(week: Week, weekday: u8) -> Result<usize> {
    if !(1..=7).contains(&weekday) {
        return Err(RoutineError::InvalidWeekday(weekday));
    }
    Ok(week.offset() + usize::from(weekday - 1))
}

/// Slot scheduled for `date`.
///
/// Weeks alternate starting from the week (Monday based) the plan was
/// created in. Returns `None` when the slot is unassigned.
pub fn todays_slot(plan: &WorkoutPlan, date: NaiveDate) -> Option<&ScheduleSlot> {
    let anchor = week_start(plan.created_at.date_naive());
    let weeks = (week_start(date) - anchor).num_days() / 7;
    let week = if weeks.rem_euclid(2) == 0 { Week::First } else { Week::Second };
    let index = week.offset() + date.weekday().num_days_from_monday() as usize;

    plan.schedule.get(index).and_then(Option::as_ref)
}
