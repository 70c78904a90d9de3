//! Progression errors.

use overload_core::{DayId, ProgressionPlanId, WorkoutId};
use overload_storage::StorageError;

/// Result type for progression operations.
pub type Result<T> = std::result::Result<T, ProgressionError>;

/// Errors raised by progression operations.
#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    /// The plan has nothing to schedule
    #[error("Plan {plan} has no enabled exercises")]
    NoEnabledExercises {
        /// Offending plan
        plan: ProgressionPlanId,
    },

    /// Interval is zero weeks or lands past the last representable date
    #[error("Exercise {exercise}: interval must be at least one week and within the calendar")]
    InvalidInterval {
        /// Offending exercise
        exercise: String,
    },

    /// Increase amount is not a positive finite number
    #[error("Exercise {exercise}: increase amount must be a positive number, got {amount}")]
    InvalidIncrease {
        /// Offending exercise
        exercise: String,
        /// Rejected amount
        amount: f64,
    },

    /// No exercise was selected for progression
    #[error("Please enable at least one exercise")]
    EmptySetup,

    /// Setup names an exercise the day does not have
    #[error("Exercise {exercise} is not part of {day}")]
    UnknownExercise {
        /// Requested exercise
        exercise: String,
        /// Day name
        day: String,
    },

    /// The day is not on the workout plan's schedule
    #[error("Day {day} is not scheduled in workout {workout}")]
    DayNotInWorkout {
        /// Workout plan
        workout: WorkoutId,
        /// Workout day
        day: DayId,
    },

    /// Referenced record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ProgressionError {
    /// Whether this is a validation failure (bad input rather than a missing
    /// record or a storage problem).
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::NotFound(_) | Self::Storage(_))
    }
}
