//! Routine library service.

use async_trait::async_trait;
use chrono::NaiveDate;
use overload_core::{
    DayId, ScheduleSlot, Time, WorkoutDay, WorkoutId, WorkoutPlan, DAYS_PER_WEEK,
};
use overload_storage::Storage;
use tracing::{debug, info, warn};
use crate::slots::{slot_index, todays_slot, Week};
use crate::{Result, RoutineError};

/// Workout days, workout plans and the current workout.
///
/// The current workout is a snapshot of a workout plan. Changes to that
/// plan made through this library refresh the snapshot.
#[async_trait]
pub trait RoutineLibrary: Send + Sync {
    /// Create or update a day by id.
    ///
    /// The name is trimmed and required. Updating keeps the stored
    /// creation timestamp.
    async fn save_day(&mut self, day: WorkoutDay, now: Time) -> Result<WorkoutDay>;

    /// All workout days.
    async fn list_days(&self) -> Result<Vec<WorkoutDay>>;

    /// One workout day by id.
    async fn get_day(&self, id: &DayId) -> Result<WorkoutDay>;

    /// Delete a day. Plans that schedule it keep their slots.
    async fn delete_day(&mut self, id: &DayId) -> Result<WorkoutDay>;

    /// Create an empty plan.
    async fn create_plan(&mut self, name: &str, now: Time) -> Result<WorkoutPlan>;

    /// All workout plans.
    async fn list_plans(&self) -> Result<Vec<WorkoutPlan>>;

    /// One workout plan by id.
    async fn get_plan(&self, id: &WorkoutId) -> Result<WorkoutPlan>;

    /// Library days scheduled in a plan, in first-appearance order. Days
    /// deleted since they were scheduled are left out.
    async fn unique_days(&self, id: &WorkoutId) -> Result<Vec<WorkoutDay>>;

    /// Put a day (or a rest day with `None`) on `weekday` (1 = Monday) of
    /// `week` (1 or 2).
    async fn assign_slot(
        &mut self,
        id: &WorkoutId,
        week: u8,
        weekday: u8,
        day_id: Option<&DayId>,
        now: Time,
    ) -> Result<WorkoutPlan>;

    /// Unassign every slot of `week`.
    async fn clear_week(&mut self, id: &WorkoutId, week: u8, now: Time) -> Result<WorkoutPlan>;

    /// Rename a plan.
    async fn rename(&mut self, id: &WorkoutId, name: &str, now: Time) -> Result<WorkoutPlan>;

    /// Delete a plan, clearing the current workout if it was this plan.
    async fn delete_plan(&mut self, id: &WorkoutId) -> Result<WorkoutPlan>;

    /// Make a plan the current workout.
    async fn set_current(&mut self, id: &WorkoutId) -> Result<WorkoutPlan>;

    /// The current workout, if any.
    async fn current(&self) -> Result<Option<WorkoutPlan>>;

    /// Forget the current workout.
    async fn clear_current(&mut self) -> Result<()>;

    /// Slot of the current workout scheduled for `date`.
    async fn todays_slot(&self, date: NaiveDate) -> Result<Option<ScheduleSlot>>;
}

/// Routine library backed by a [`Storage`] implementation.
pub struct BasicRoutineLibrary<S: Storage> {
    storage: S,
}

impl<S: Storage> BasicRoutineLibrary<S> {
    /// Create a new routine library.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    async fn update_plan<F>(&mut self, id: &WorkoutId, now: Time, change: F) -> Result<WorkoutPlan>
    where
        F: FnOnce(&mut WorkoutPlan) + Send,
    {
        let previous = self.storage.load_workout_plans().await?;
        let mut plans = previous.clone();
        let plan = plans.iter_mut().find(|p| &p.id == id).ok_or_else(|| plan_not_found(id))?;

        // Older documents may carry a short schedule
        if plan.schedule.len() < overload_core::SCHEDULE_DAYS {
            plan.schedule.resize(overload_core::SCHEDULE_DAYS, None);
        }
        change(plan);
        plan.updated_at = Some(now);
        let updated = plan.clone();

        let is_current = self.is_current(id).await?;
        self.storage.save_workout_plans(&plans).await?;
        if is_current {
            if let Err(err) = self.storage.save_current_workout(Some(&updated)).await {
                self.restore_plans(&previous).await;
                return Err(err.into());
            }
        }
        Ok(updated)
    }

    async fn restore_plans(&mut self, previous: &[WorkoutPlan]) {
        if let Err(err) = self.storage.save_workout_plans(previous).await {
            warn!(error = %err, "Failed to restore workout plans");
        }
    }

    async fn is_current(&self, id: &WorkoutId) -> Result<bool> {
        Ok(self
            .storage
            .load_current_workout()
            .await?
            .map_or(false, |current| &current.id == id))
    }
}

#[async_trait]
impl<S: Storage + 'static> RoutineLibrary for BasicRoutineLibrary<S> {
    // ===== Workout days =====

    async fn save_day(&mut self, mut day: WorkoutDay, now: Time) -> Result<WorkoutDay> {
        day.name = required_name(&day.name)?;
        day.updated_at = now;

        let mut days = self.storage.load_workout_days().await?;
        match days.iter_mut().find(|d| d.id == day.id) {
            Some(existing) => {
                day.created_at = existing.created_at;
                *existing = day.clone();
            }
            None => days.push(day.clone()),
        }

        self.storage.save_workout_days(&days).await?;
        info!(day = %day.id, name = %day.name, exercises = day.exercises.len(), "Saved workout day");
        Ok(day)
    }

    async fn list_days(&self) -> Result<Vec<WorkoutDay>> {
        Ok(self.storage.load_workout_days().await?)
    }

    async fn get_day(&self, id: &DayId) -> Result<WorkoutDay> {
        self.storage
            .load_workout_days()
            .await?
            .into_iter()
            .find(|d| &d.id == id)
            .ok_or_else(|| RoutineError::NotFound(format!("workout day {}", id)))
    }

    async fn delete_day(&mut self, id: &DayId) -> Result<WorkoutDay> {
        let mut days = self.storage.load_workout_days().await?;
        let index = days
            .iter()
            .position(|d| &d.id == id)
            .ok_or_else(|| RoutineError::NotFound(format!("workout day {}", id)))?;
        let removed = days.remove(index);

        self.storage.save_workout_days(&days).await?;
        info!(day = %id, "Deleted workout day");
        Ok(removed)
    }

    // ===== Workout plans =====

    async fn create_plan(&mut self, name: &str, now: Time) -> Result<WorkoutPlan> {
        let mut plan = WorkoutPlan::new(required_name(name)?);
        plan.created_at = now;
        plan.updated_at = Some(now);

        let mut plans = self.storage.load_workout_plans().await?;
        plans.push(plan.clone());
        self.storage.save_workout_plans(&plans).await?;

        info!(workout = %plan.id, name = %plan.name, "Created workout plan");
        Ok(plan)
    }

    async fn list_plans(&self) -> Result<Vec<WorkoutPlan>> {
        Ok(self.storage.load_workout_plans().await?)
    }

    async fn get_plan(&self, id: &WorkoutId) -> Result<WorkoutPlan> {
        self.storage
            .load_workout_plans()
            .await?
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| plan_not_found(id))
    }

    async fn unique_days(&self, id: &WorkoutId) -> Result<Vec<WorkoutDay>> {
        let plan = self.get_plan(id).await?;
        let mut days = self.storage.load_workout_days().await?;

        let mut scheduled = Vec::new();
        for day_id in plan.unique_day_ids() {
            if let Some(index) = days.iter().position(|d| &d.id == day_id) {
                scheduled.push(days.swap_remove(index));
            }
        }
        Ok(scheduled)
    }

    async fn assign_slot(
        &mut self,
        id: &WorkoutId,
        week: u8,
        weekday: u8,
        day_id: Option<&DayId>,
        now: Time,
    ) -> Result<WorkoutPlan> {
        let index = slot_index(Week::from_number(week)?, weekday)?;
        let slot = match day_id {
            Some(day_id) => {
                let day = self.get_day(day_id).await?;
                ScheduleSlot::workout(day.id.clone(), day.name.clone(), day.icon.as_deref())
            }
            None => ScheduleSlot::rest(),
        };

        debug!(workout = %id, index, day = %slot.day_name, "Assigning slot");
        self.update_plan(id, now, |plan| plan.schedule[index] = Some(slot)).await
    }

    async fn clear_week(&mut self, id: &WorkoutId, week: u8, now: Time) -> Result<WorkoutPlan> {
        let start = slot_index(Week::from_number(week)?, 1)?;
        self.update_plan(id, now, |plan| {
            for slot in &mut plan.schedule[start..start + DAYS_PER_WEEK] {
                *slot = None;
            }
        })
        .await
    }

    async fn rename(&mut self, id: &WorkoutId, name: &str, now: Time) -> Result<WorkoutPlan> {
        let name = required_name(name)?;
        self.update_plan(id, now, |plan| plan.name = name).await
    }

    async fn delete_plan(&mut self, id: &WorkoutId) -> Result<WorkoutPlan> {
        let previous = self.storage.load_workout_plans().await?;
        let mut plans = previous.clone();
        let index = plans.iter().position(|p| &p.id == id).ok_or_else(|| plan_not_found(id))?;
        let removed = plans.remove(index);

        let is_current = self.is_current(id).await?;
        self.storage.save_workout_plans(&plans).await?;
        if is_current {
            if let Err(err) = self.storage.save_current_workout(None).await {
                self.restore_plans(&previous).await;
                return Err(err.into());
            }
            info!(workout = %id, "Cleared current workout");
        }

        info!(workout = %id, "Deleted workout plan");
        Ok(removed)
    }

    // ===== Current workout =====

    async fn set_current(&mut self, id: &WorkoutId) -> Result<WorkoutPlan> {
        let plan = self.get_plan(id).await?;
        self.storage.save_current_workout(Some(&plan)).await?;
        info!(workout = %id, name = %plan.name, "Set current workout");
        Ok(plan)
    }

    async fn current(&self) -> Result<Option<WorkoutPlan>> {
        Ok(self.storage.load_current_workout().await?)
    }

    async fn clear_current(&mut self) -> Result<()> {
        self.storage.save_current_workout(None).await?;
        info!("Cleared current workout");
        Ok(())
    }

    async fn todays_slot(&self, date: NaiveDate) -> Result<Option<ScheduleSlot>> {
        Ok(self
            .current()
            .await?
            .and_then(|plan| todays_slot(&plan, date).cloned()))
    }
}

fn required_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RoutineError::EmptyName);
    }
    Ok(name.to_string())
}

fn plan_not_found(id: &WorkoutId) -> RoutineError {
    RoutineError::NotFound(format!("workout plan {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use overload_core::DayExercise;
    use overload_storage::{Collection, MemoryStorage};

    fn at(y: i32, m: u32, d: u32) -> Time {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn library() -> BasicRoutineLibrary<MemoryStorage> {
        BasicRoutineLibrary::new(MemoryStorage::new())
    }

    #[tokio::test]
    async fn test_save_day_trims_and_keeps_created_at() {
        let mut lib = library();
        let day = WorkoutDay::new("  Leg Day ", vec![DayExercise::new("Squats")]);

        let saved = lib.save_day(day, at(2024, 1, 1)).await.unwrap();
        assert_eq!(saved.name, "Leg Day");

        let mut edited = saved.clone();
        edited.name = "Legs".to_string();
        edited.created_at = at(2030, 1, 1);
        let updated = lib.save_day(edited, at(2024, 2, 1)).await.unwrap();

        assert_eq!(updated.created_at, saved.created_at);
        assert_eq!(updated.updated_at, at(2024, 2, 1));
        let days = lib.list_days().await.unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].name, "Legs");
    }

    #[tokio::test]
    async fn test_blank_names_rejected() {
        let mut lib = library();

        let day = WorkoutDay::new("   ", vec![]);
        assert!(matches!(lib.save_day(day, at(2024, 1, 1)).await, Err(RoutineError::EmptyName)));
        assert!(matches!(lib.create_plan("", at(2024, 1, 1)).await, Err(RoutineError::EmptyName)));
        assert!(lib.list_days().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_build_schedule() {
        let mut lib = library();
        let legs = lib.save_day(WorkoutDay::new("Leg Day", vec![]), at(2024, 1, 1)).await.unwrap();
        let arms = lib.save_day(WorkoutDay::new("Arm Day", vec![]), at(2024, 1, 1)).await.unwrap();
        let plan = lib.create_plan("Demo", at(2024, 1, 1)).await.unwrap();
        assert_eq!(plan.schedule.len(), 14);

        lib.assign_slot(&plan.id, 1, 1, Some(&legs.id), at(2024, 1, 2)).await.unwrap();
        lib.assign_slot(&plan.id, 1, 3, Some(&arms.id), at(2024, 1, 2)).await.unwrap();
        lib.assign_slot(&plan.id, 2, 1, Some(&legs.id), at(2024, 1, 2)).await.unwrap();
        let plan = lib.assign_slot(&plan.id, 1, 7, None, at(2024, 1, 2)).await.unwrap();

        assert_eq!(plan.workout_day_count(), 3);
        assert_eq!(plan.days_summary(), "2 Leg Day, 1 Arm Day");
        assert_eq!(plan.unique_day_ids(), vec![&legs.id, &arms.id]);
        assert_eq!(plan.updated_at, Some(at(2024, 1, 2)));

        let days = lib.unique_days(&plan.id).await.unwrap();
        let names: Vec<&str> = days.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Leg Day", "Arm Day"]);

        let plan = lib.clear_week(&plan.id, 2, at(2024, 1, 3)).await.unwrap();
        assert_eq!(plan.workout_day_count(), 2);
        assert!(plan.schedule[6].is_some());
    }

    #[tokio::test]
    async fn test_assign_errors() {
        let mut lib = library();
        let plan = lib.create_plan("Demo", at(2024, 1, 1)).await.unwrap();

        let bad_week = lib.assign_slot(&plan.id, 3, 1, None, at(2024, 1, 1)).await;
        assert!(matches!(bad_week, Err(RoutineError::InvalidWeek(3))));

        let missing_day = DayId::from("day-missing");
        let result = lib.assign_slot(&plan.id, 1, 1, Some(&missing_day), at(2024, 1, 1)).await;
        assert!(matches!(result, Err(RoutineError::NotFound(_))));

        let missing_plan = WorkoutId::from("workout-missing");
        let result = lib.rename(&missing_plan, "New", at(2024, 1, 1)).await;
        assert!(matches!(result, Err(RoutineError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_current_follows_plan() {
        let mut lib = library();
        let legs = lib.save_day(WorkoutDay::new("Leg Day", vec![]), at(2024, 1, 1)).await.unwrap();
        // Monday
        let plan = lib.create_plan("Demo", at(2024, 1, 15)).await.unwrap();
        assert!(lib.current().await.unwrap().is_none());

        lib.set_current(&plan.id).await.unwrap();
        lib.assign_slot(&plan.id, 2, 2, Some(&legs.id), at(2024, 1, 16)).await.unwrap();
        lib.rename(&plan.id, "Renamed", at(2024, 1, 16)).await.unwrap();

        let current = lib.current().await.unwrap().unwrap();
        assert_eq!(current.name, "Renamed");

        // Tuesday of the second week
        let slot = lib.todays_slot(at(2024, 1, 23).date_naive()).await.unwrap().unwrap();
        assert_eq!(slot.day_id.as_ref(), Some(&legs.id));
        assert!(lib.todays_slot(at(2024, 1, 16).date_naive()).await.unwrap().is_none());

        lib.delete_plan(&plan.id).await.unwrap();
        assert!(lib.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_day_keeps_slots() {
        let mut lib = library();
        let legs = lib.save_day(WorkoutDay::new("Leg Day", vec![]), at(2024, 1, 1)).await.unwrap();
        let plan = lib.create_plan("Demo", at(2024, 1, 1)).await.unwrap();
        lib.assign_slot(&plan.id, 1, 1, Some(&legs.id), at(2024, 1, 1)).await.unwrap();

        lib.delete_day(&legs.id).await.unwrap();

        assert!(matches!(lib.get_day(&legs.id).await, Err(RoutineError::NotFound(_))));
        assert!(lib.unique_days(&plan.id).await.unwrap().is_empty());
        let plan = lib.get_plan(&plan.id).await.unwrap();
        assert_eq!(plan.schedule[0].as_ref().unwrap().day_name, "Leg Day");
    }

    #[tokio::test]
    async fn test_clear_current() {
        let mut lib = library();
        let plan = lib.create_plan("Demo", at(2024, 1, 1)).await.unwrap();
        lib.set_current(&plan.id).await.unwrap();

        lib.clear_current().await.unwrap();

        assert!(lib.current().await.unwrap().is_none());
        assert!(lib.todays_slot(at(2024, 1, 1).date_naive()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_current_write_restores_plans() {
        let mut storage = MemoryStorage::new();
        let plan = WorkoutPlan::new("Demo");
        storage.save_workout_plans(&[plan.clone()]).await.unwrap();
        storage.save_current_workout(Some(&plan)).await.unwrap();
        storage.fail_saves(Collection::CurrentWorkout);
        let mut lib = BasicRoutineLibrary::new(storage);

        let renamed = lib.rename(&plan.id, "Renamed", at(2024, 1, 2)).await;
        assert!(matches!(renamed, Err(RoutineError::Storage(_))));
        assert_eq!(lib.list_plans().await.unwrap(), vec![plan.clone()]);

        let deleted = lib.delete_plan(&plan.id).await;
        assert!(matches!(deleted, Err(RoutineError::Storage(_))));
        assert_eq!(lib.list_plans().await.unwrap(), vec![plan.clone()]);
        assert_eq!(lib.current().await.unwrap(), Some(plan));
    }
}
