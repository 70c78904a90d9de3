//! Overload core data models.
//!
//! This crate defines the records persisted by the fitness tracker:
//! workout days, bi-weekly workout plans, logged sessions, progression
//! plans and calendar entries. Field names on the wire are camelCase and
//! form the stored schema, so they must not change.

#![warn(missing_docs)]

// Core identities
mod id;

// Date arithmetic shared by every crate
pub mod date;

// Routine library
mod day;
mod workout;

// Logged sessions
mod session;

// Progressive overload
mod progression;
mod calendar;

mod lenient;

// Re-exports
pub use id::*;

pub use day::{WorkoutDay, DayExercise};
pub use workout::{WorkoutPlan, ScheduleSlot, SCHEDULE_DAYS, DAYS_PER_WEEK};
pub use session::{WorkoutSession, SessionExercise};
pub use progression::{
    ProgressionPlan, ExerciseProgression, ProgressionVariable, ParseVariableError,
};
pub use calendar::{CalendarEntry, PROGRESSION_ENTRY_TYPE};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;

/// Calendar date without a time component (`YYYY-MM-DD` on the wire).
pub type Date = chrono::NaiveDate;
