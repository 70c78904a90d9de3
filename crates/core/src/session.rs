//! Logged workout sessions.

use serde::{Deserialize, Serialize};
use crate::id::{DayId, SessionId, WorkoutId};
use crate::lenient::optional_number;
use crate::Date;

/// A completed workout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    /// Unique identifier
    pub id: SessionId,

    /// Workout plan the session belongs to
    pub workout_id: WorkoutId,

    /// Workout day performed
    pub day_id: DayId,

    /// Denormalized day name
    #[serde(default)]
    pub day_name: String,

    /// Day the session took place
    pub date: Date,

    /// Free-form duration, e.g. "45 minutes"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// What was performed
    #[serde(default)]
    pub exercises: Vec<SessionExercise>,
}

/// One exercise as performed in a session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionExercise {
    /// Exercise name
    pub name: String,

    /// Sets performed
    #[serde(default, deserialize_with = "optional_number")]
    pub sets: Option<u32>,

    /// Repetitions per set
    #[serde(default, deserialize_with = "optional_number")]
    pub reps: Option<u32>,

    /// Weight used (lbs)
    #[serde(default, alias = "avgWeight", deserialize_with = "optional_number")]
    pub weight: Option<f64>,

    /// Rest between sets (seconds)
    #[serde(default, alias = "restTime", deserialize_with = "optional_number")]
    pub rest: Option<u32>,
}

impl SessionExercise {
    /// Training volume: weight x reps x sets, when all three are known.
    pub fn volume(&self) -> Option<f64> {
        Some(self.weight? * f64::from(self.reps?) * f64::from(self.sets?))
    }
}

impl WorkoutSession {
    /// Find an exercise by name.
    pub fn exercise(&self, name: &str) -> Option<&SessionExercise> {
        self.exercises.iter().find(|e| e.name == name)
    }
}
