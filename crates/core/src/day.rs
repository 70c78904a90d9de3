//! Workout day model - a named template of exercises.

use serde::{Deserialize, Serialize};
use crate::id::DayId;
use crate::lenient::optional_number;
use crate::Time;

/// A workout day, e.g. "Leg Day", listing the exercises performed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// Unique identifier
    pub id: DayId,

    /// Display name
    pub name: String,

    /// Emoji icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Exercises in performing order
    #[serde(default)]
    pub exercises: Vec<DayExercise>,

    /// Creation timestamp
    pub created_at: Time,

    /// Last update timestamp
    pub updated_at: Time,
}

impl WorkoutDay {
    /// Create a new day with a fresh id.
    pub fn new(name: impl Into<String>, exercises: Vec<DayExercise>) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: DayId::new(),
            name: name.into(),
            icon: None,
            exercises,
            created_at: now,
            updated_at: now,
        }
    }

    /// Find an exercise by name.
    pub fn exercise(&self, name: &str) -> Option<&DayExercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    /// Icon to show, falling back to the default.
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }
}

pub(crate) const DEFAULT_ICON: &str = "🏋️";

/// One exercise prescription within a workout day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayExercise {
    /// Exercise name
    pub name: String,

    /// Number of sets
    #[serde(default, deserialize_with = "optional_number")]
    pub sets: Option<u32>,

    /// Repetitions per set
    #[serde(default, deserialize_with = "optional_number")]
    pub reps: Option<u32>,

    /// Working weight (lbs)
    #[serde(default, deserialize_with = "optional_number")]
    pub weight: Option<f64>,

    /// Rest between sets (seconds)
    #[serde(default, deserialize_with = "optional_number")]
    pub rest: Option<u32>,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl DayExercise {
    /// Create an exercise with the Day Maker defaults (3 x 10, 60s rest).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: Some(3),
            reps: Some(10),
            weight: None,
            rest: Some(60),
            notes: String::new(),
        }
    }
}
