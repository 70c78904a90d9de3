//! Progression plan model - scheduled progressive overload for a workout day.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::id::{DayId, ProgressionPlanId, WorkoutId};
use crate::lenient::{count_or_zero, number_or_nan};
use crate::{Date, Time};

/// Progressive overload setup for one workout day of one workout plan.
///
/// At most one plan exists per `(workout_id, day_id)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionPlan {
    /// Unique identifier
    pub id: ProgressionPlanId,

    /// Workout plan the day belongs to
    pub workout_id: WorkoutId,

    /// Denormalized workout plan name
    pub workout_name: String,

    /// Workout day being progressed
    pub day_id: DayId,

    /// Denormalized day name
    pub day_name: String,

    /// Day the plan began
    pub start_date: Date,

    /// Per-exercise progression, keyed by exercise name
    pub exercises: BTreeMap<String, ExerciseProgression>,

    /// Creation timestamp
    pub created_at: Time,

    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Time>,
}

impl ProgressionPlan {
    /// Enabled exercises, by name.
    pub fn enabled_exercises(&self) -> impl Iterator<Item = (&String, &ExerciseProgression)> {
        self.exercises.iter().filter(|(_, ex)| ex.enabled)
    }

    /// Names of enabled exercises due on `today`.
    pub fn due_exercises(&self, today: Date) -> Vec<&str> {
        self.exercises
            .iter()
            .filter(|(_, ex)| ex.is_due(today))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Whether any enabled exercise is due on `today`.
    pub fn is_due(&self, today: Date) -> bool {
        self.exercises.values().any(|ex| ex.is_due(today))
    }

    /// Whether this plan covers the given workout day.
    pub fn covers(&self, workout_id: &WorkoutId, day_id: &DayId) -> bool {
        &self.workout_id == workout_id && &self.day_id == day_id
    }
}

/// How one exercise escalates over the life of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseProgression {
    /// Attribute that escalates
    pub variable: ProgressionVariable,

    /// Delta added at each increase (NaN when stored unreadable)
    #[serde(deserialize_with = "number_or_nan")]
    pub increase_amount: f64,

    /// Weeks between increases (0 when stored unreadable)
    #[serde(deserialize_with = "count_or_zero")]
    pub interval_weeks: u32,

    /// Value when the plan was created
    #[serde(deserialize_with = "number_or_nan")]
    pub starting_value: f64,

    /// Value in effect now; never decreases
    #[serde(deserialize_with = "number_or_nan")]
    pub current_value: f64,

    /// Day the countdown began
    pub start_date: Date,

    /// Next day on which the value should increase
    pub next_increase_date: Date,

    /// When the last increase was applied
    pub last_increased: Option<Time>,

    /// Disabled exercises keep their history but are never due
    pub enabled: bool,
}

impl ExerciseProgression {
    /// Whether this exercise should increase on `today`.
    pub fn is_due(&self, today: Date) -> bool {
        self.enabled && self.next_increase_date == today
    }
}

/// The exercise attribute a progression escalates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressionVariable {
    /// Working weight
    Weight,
    /// Repetitions per set
    Reps,
    /// Number of sets
    Sets,
    /// Rest time between sets
    Rest,
}

impl ProgressionVariable {
    /// All variables, in display order.
    pub const ALL: [ProgressionVariable; 4] = [
        ProgressionVariable::Weight,
        ProgressionVariable::Reps,
        ProgressionVariable::Sets,
        ProgressionVariable::Rest,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressionVariable::Weight => "weight",
            ProgressionVariable::Reps => "reps",
            ProgressionVariable::Sets => "sets",
            ProgressionVariable::Rest => "rest",
        }
    }

    /// Unit label for display.
    pub fn unit(&self) -> &'static str {
        match self {
            ProgressionVariable::Weight => "lbs",
            ProgressionVariable::Reps => "reps",
            ProgressionVariable::Sets => "sets",
            ProgressionVariable::Rest => "seconds",
        }
    }
}

impl std::fmt::Display for ProgressionVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown progression variable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown progression variable: {0} (expected weight, reps, sets or rest)")]
pub struct ParseVariableError(pub String);

impl std::str::FromStr for ProgressionVariable {
    type Err = ParseVariableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight" => Ok(Self::Weight),
            "reps" => Ok(Self::Reps),
            "sets" => Ok(Self::Sets),
            "rest" => Ok(Self::Rest),
            _ => Err(ParseVariableError(s.to_string())),
        }
    }
}
