//! In-memory storage backend.

use overload_core::{CalendarEntry, ProgressionPlan, WorkoutDay, WorkoutPlan, WorkoutSession};
use super::{Storage, StorageError, Result};

/// Storage that keeps every collection in memory.
///
/// Used by tests and by callers that manage persistence themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    progression_plans: Vec<ProgressionPlan>,
    calendar: Vec<CalendarEntry>,
    workout_days: Vec<WorkoutDay>,
    workout_plans: Vec<WorkoutPlan>,
    current_workout: Option<WorkoutPlan>,
    sessions: Vec<WorkoutSession>,
    read_only: bool,
    failing: Vec<Collection>,
}

/// One of the collections a [`Storage`] persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Progression plans
    ProgressionPlans,
    /// Calendar entries
    Calendar,
    /// Saved workout days
    WorkoutDays,
    /// Workout plans
    WorkoutPlans,
    /// Current workout snapshot
    CurrentWorkout,
    /// Logged sessions
    Sessions,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every save fail, leaving stored data untouched.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Make saves of one collection fail while the others succeed.
    pub fn fail_saves(&mut self, collection: Collection) {
        if !self.failing.contains(&collection) {
            self.failing.push(collection);
        }
    }

    fn check_writable(&self, collection: Collection) -> Result<()> {
        if self.read_only {
            return Err(StorageError::Other("storage is read-only".to_string()));
        }
        if self.failing.contains(&collection) {
            return Err(StorageError::Other(format!("saving {:?} failed", collection)));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn load_progression_plans(&self) -> Result<Vec<ProgressionPlan>> {
        Ok(self.progression_plans.clone())
    }

    async fn save_progression_plans(&mut self, plans: &[ProgressionPlan]) -> Result<()> {
        self.check_writable(Collection::ProgressionPlans)?;
        self.progression_plans = plans.to_vec();
        Ok(())
    }

    async fn load_calendar_entries(&self) -> Result<Vec<CalendarEntry>> {
        Ok(self.calendar.clone())
    }

    async fn save_calendar_entries(&mut self, entries: &[CalendarEntry]) -> Result<()> {
        self.check_writable(Collection::Calendar)?;
        self.calendar = entries.to_vec();
        Ok(())
    }

    async fn load_workout_days(&self) -> Result<Vec<WorkoutDay>> {
        Ok(self.workout_days.clone())
    }

    async fn save_workout_days(&mut self, days: &[WorkoutDay]) -> Result<()> {
        self.check_writable(Collection::WorkoutDays)?;
        self.workout_days = days.to_vec();
        Ok(())
    }

    async fn load_workout_plans(&self) -> Result<Vec<WorkoutPlan>> {
        Ok(self.workout_plans.clone())
    }

    async fn save_workout_plans(&mut self, plans: &[WorkoutPlan]) -> Result<()> {
        self.check_writable(Collection::WorkoutPlans)?;
        self.workout_plans = plans.to_vec();
        Ok(())
    }

    async fn load_current_workout(&self) -> Result<Option<WorkoutPlan>> {
        Ok(self.current_workout.clone())
    }

    async fn save_current_workout(&mut self, plan: Option<&WorkoutPlan>) -> Result<()> {
        self.check_writable(Collection::CurrentWorkout)?;
        self.current_workout = plan.cloned();
        Ok(())
    }

    async fn load_sessions(&self) -> Result<Vec<WorkoutSession>> {
        Ok(self.sessions.clone())
    }

    async fn save_sessions(&mut self, sessions: &[WorkoutSession]) -> Result<()> {
        self.check_writable(Collection::Sessions)?;
        self.sessions = sessions.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_only_rejects_saves() {
        let mut storage = MemoryStorage::new();
        storage.save_workout_plans(&[WorkoutPlan::new("A")]).await.unwrap();

        storage.set_read_only(true);
        assert!(storage.save_workout_plans(&[]).await.is_err());
        assert_eq!(storage.load_workout_plans().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fail_saves_targets_one_collection() {
        let mut storage = MemoryStorage::new();
        storage.fail_saves(Collection::Calendar);

        assert!(storage.save_calendar_entries(&[]).await.is_err());
        storage.save_workout_plans(&[WorkoutPlan::new("A")]).await.unwrap();
        assert_eq!(storage.load_workout_plans().await.unwrap().len(), 1);
    }
}
