//! Storage trait abstraction.

use async_trait::async_trait;
use overload_core::{CalendarEntry, ProgressionPlan, WorkoutDay, WorkoutPlan, WorkoutSession};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Storage collaborator for Overload data.
///
/// Collections are read and written wholesale: callers load everything,
/// compute in memory and save everything back. The last writer wins.
/// A failed save must leave the previously stored collection intact.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Progression operations ===

    /// Load all progression plans.
    async fn load_progression_plans(&self) -> Result<Vec<ProgressionPlan>>;

    /// Replace all progression plans.
    async fn save_progression_plans(&mut self, plans: &[ProgressionPlan]) -> Result<()>;

    // === Calendar operations ===

    /// Load all calendar entries.
    async fn load_calendar_entries(&self) -> Result<Vec<CalendarEntry>>;

    /// Replace all calendar entries.
    async fn save_calendar_entries(&mut self, entries: &[CalendarEntry]) -> Result<()>;

    // === Routine operations ===

    /// Load all workout days.
    async fn load_workout_days(&self) -> Result<Vec<WorkoutDay>>;

    /// Replace all workout days.
    async fn save_workout_days(&mut self, days: &[WorkoutDay]) -> Result<()>;

    /// Load all workout plans.
    async fn load_workout_plans(&self) -> Result<Vec<WorkoutPlan>>;

    /// Replace all workout plans.
    async fn save_workout_plans(&mut self, plans: &[WorkoutPlan]) -> Result<()>;

    /// Load the current workout, if one is selected.
    async fn load_current_workout(&self) -> Result<Option<WorkoutPlan>>;

    /// Set or clear the current workout.
    async fn save_current_workout(&mut self, plan: Option<&WorkoutPlan>) -> Result<()>;

    // === Session operations ===

    /// Load all logged sessions.
    async fn load_sessions(&self) -> Result<Vec<WorkoutSession>>;

    /// Replace all logged sessions.
    async fn save_sessions(&mut self, sessions: &[WorkoutSession]) -> Result<()>;
}
