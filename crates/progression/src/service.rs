//! Progression service.
//!
//! Runs the pure progression functions against a storage backend. Every
//! operation loads the collections it needs, computes in memory and writes
//! the results back; validation happens before anything is written.

use std::collections::{BTreeMap, HashSet};
use chrono::NaiveDate;
use overload_core::{
    CalendarEntry, DayId, ProgressionPlan, ProgressionPlanId, Time, WorkoutId,
};
use async_trait::async_trait;
use overload_storage::Storage;
use tracing::{debug, info, warn};
use crate::calendar::{annotate_calendar, prune_orphaned_markers, Annotation};
use crate::due::{plans_due, skip_due};
use crate::increase::{apply_increases, IncreaseReport};
use crate::planner::{build_plan, ExerciseSetup};
use crate::schedule::increase_schedule;
use crate::{ProgressionError, Result};

/// Result of saving a plan.
#[derive(Debug, Clone)]
pub struct SavedPlan {
    /// The stored plan
    pub plan: ProgressionPlan,
    /// Plan it replaced for the same workout day
    pub replaced: Option<ProgressionPlanId>,
    /// Dates marked on the calendar
    pub schedule: Vec<NaiveDate>,
    /// Calendar changes
    pub annotation: Annotation,
}

/// Progression operations over a storage backend.
#[async_trait]
pub trait ProgressionService: Send + Sync {
    /// All stored plans.
    async fn list_plans(&self) -> Result<Vec<ProgressionPlan>>;

    /// One plan by id.
    async fn get_plan(&self, id: &ProgressionPlanId) -> Result<ProgressionPlan>;

    /// Build a plan for a scheduled workout day and save it.
    async fn create_plan(
        &mut self,
        workout_id: &WorkoutId,
        day_id: &DayId,
        setups: &BTreeMap<String, ExerciseSetup>,
        now: Time,
    ) -> Result<SavedPlan>;

    /// Store a plan, replacing any plan for the same workout day, and mark
    /// its increase dates on the calendar.
    ///
    /// When the calendar cannot be written the stored plans are restored.
    async fn save_plan(&mut self, plan: ProgressionPlan) -> Result<SavedPlan>;

    /// Delete a plan. Its calendar markers stay until
    /// [`prune_calendar`](Self::prune_calendar) is run.
    async fn delete_plan(&mut self, id: &ProgressionPlanId) -> Result<ProgressionPlan>;

    /// Plans with an increase due on `today`.
    async fn due_today(&self, today: NaiveDate) -> Result<Vec<ProgressionPlan>>;

    /// Apply every increase due on `today` in one plan.
    async fn apply_due(
        &mut self,
        id: &ProgressionPlanId,
        today: NaiveDate,
        now: Time,
    ) -> Result<IncreaseReport>;

    /// Defer everything due on `today` in one plan to tomorrow.
    async fn skip_due(
        &mut self,
        id: &ProgressionPlanId,
        today: NaiveDate,
        now: Time,
    ) -> Result<Vec<String>>;

    /// Enable or disable one exercise of a plan. Its values are kept either way.
    async fn set_exercise_enabled(
        &mut self,
        id: &ProgressionPlanId,
        exercise: &str,
        enabled: bool,
        now: Time,
    ) -> Result<()>;

    /// All calendar entries.
    async fn calendar_entries(&self) -> Result<Vec<CalendarEntry>>;

    /// Remove calendar markers left behind by deleted plans.
    async fn prune_calendar(&mut self) -> Result<usize>;
}

/// Progression service backed by a [`Storage`] implementation.
pub struct BasicProgressionService<S: Storage> {
    storage: S,
}

impl<S: Storage> BasicProgressionService<S> {
    /// Create a new progression service.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S: Storage + 'static> ProgressionService for BasicProgressionService<S> {
    async fn list_plans(&self) -> Result<Vec<ProgressionPlan>> {
        Ok(self.storage.load_progression_plans().await?)
    }

    async fn get_plan(&self, id: &ProgressionPlanId) -> Result<ProgressionPlan> {
        self.storage
            .load_progression_plans()
            .await?
            .into_iter()
            .find(|plan| &plan.id == id)
            .ok_or_else(|| not_found(id))
    }

    async fn create_plan(
        &mut self,
        workout_id: &WorkoutId,
        day_id: &DayId,
        setups: &BTreeMap<String, ExerciseSetup>,
        now: Time,
    ) -> Result<SavedPlan> {
        let workout = self
            .storage
            .load_workout_plans()
            .await?
            .into_iter()
            .find(|w| &w.id == workout_id)
            .ok_or_else(|| ProgressionError::NotFound(format!("workout plan {}", workout_id)))?;
        let day = self
            .storage
            .load_workout_days()
            .await?
            .into_iter()
            .find(|d| &d.id == day_id)
            .ok_or_else(|| ProgressionError::NotFound(format!("workout day {}", day_id)))?;

        let plan = build_plan(&workout, &day, setups, now)?;
        self.save_plan(plan).await
    }

    async fn save_plan(&mut self, plan: ProgressionPlan) -> Result<SavedPlan> {
        let schedule = increase_schedule(&plan)?;

        let previous = self.storage.load_progression_plans().await?;
        let mut plans = previous.clone();
        let replaced = plans
            .iter()
            .position(|p| p.covers(&plan.workout_id, &plan.day_id))
            .map(|i| plans.remove(i).id);
        plans.retain(|p| !p.covers(&plan.workout_id, &plan.day_id));
        plans.push(plan.clone());

        let mut entries = self.storage.load_calendar_entries().await?;
        let annotation = annotate_calendar(&mut entries, &plan.id, &schedule);

        self.storage.save_progression_plans(&plans).await?;
        if let Err(err) = self.storage.save_calendar_entries(&entries).await {
            if let Err(restore) = self.storage.save_progression_plans(&previous).await {
                warn!(plan = %plan.id, error = %restore, "Failed to restore progression plans");
            }
            return Err(err.into());
        }

        info!(
            plan = %plan.id,
            day = %plan.day_name,
            marked = schedule.len(),
            replaced = replaced.is_some(),
            "Saved progression plan"
        );

        Ok(SavedPlan { plan, replaced, schedule, annotation })
    }

    async fn delete_plan(&mut self, id: &ProgressionPlanId) -> Result<ProgressionPlan> {
        let mut plans = self.storage.load_progression_plans().await?;
        let index = plans.iter().position(|p| &p.id == id).ok_or_else(|| not_found(id))?;
        let removed = plans.remove(index);

        self.storage.save_progression_plans(&plans).await?;
        info!(plan = %id, "Deleted progression plan");
        Ok(removed)
    }

    async fn due_today(&self, today: NaiveDate) -> Result<Vec<ProgressionPlan>> {
        let plans = self.storage.load_progression_plans().await?;
        let due: Vec<ProgressionPlan> = plans_due(&plans, today).into_iter().cloned().collect();
        debug!(%today, due = due.len(), "Checked due progressions");
        Ok(due)
    }

    async fn apply_due(
        &mut self,
        id: &ProgressionPlanId,
        today: NaiveDate,
        now: Time,
    ) -> Result<IncreaseReport> {
        let mut plans = self.storage.load_progression_plans().await?;
        let plan = plans.iter_mut().find(|p| &p.id == id).ok_or_else(|| not_found(id))?;

        let report = apply_increases(plan, today, now);
        if report.applied.is_empty() {
            return Ok(report);
        }
        plan.updated_at = Some(now);

        self.storage.save_progression_plans(&plans).await?;
        info!(
            plan = %id,
            applied = report.applied.len(),
            failed = report.failed.len(),
            "Applied progression increases"
        );
        Ok(report)
    }

    async fn skip_due(
        &mut self,
        id: &ProgressionPlanId,
        today: NaiveDate,
        now: Time,
    ) -> Result<Vec<String>> {
        let mut plans = self.storage.load_progression_plans().await?;
        let plan = plans.iter_mut().find(|p| &p.id == id).ok_or_else(|| not_found(id))?;

        let skipped = skip_due(plan, today);
        if skipped.is_empty() {
            return Ok(skipped);
        }
        plan.updated_at = Some(now);

        self.storage.save_progression_plans(&plans).await?;
        info!(plan = %id, skipped = skipped.len(), "Deferred progression increases");
        Ok(skipped)
    }

    async fn set_exercise_enabled(
        &mut self,
        id: &ProgressionPlanId,
        exercise: &str,
        enabled: bool,
        now: Time,
    ) -> Result<()> {
        let mut plans = self.storage.load_progression_plans().await?;
        let plan = plans.iter_mut().find(|p| &p.id == id).ok_or_else(|| not_found(id))?;
        let entry = plan.exercises.get_mut(exercise).ok_or_else(|| {
            ProgressionError::NotFound(format!("exercise {} in plan {}", exercise, id))
        })?;

        if entry.enabled == enabled {
            return Ok(());
        }
        entry.enabled = enabled;
        plan.updated_at = Some(now);

        self.storage.save_progression_plans(&plans).await?;
        info!(plan = %id, exercise, enabled, "Changed exercise progression");
        Ok(())
    }

    async fn calendar_entries(&self) -> Result<Vec<CalendarEntry>> {
        Ok(self.storage.load_calendar_entries().await?)
    }

    async fn prune_calendar(&mut self) -> Result<usize> {
        let live: HashSet<ProgressionPlanId> = self
            .storage
            .load_progression_plans()
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();
        let mut entries = self.storage.load_calendar_entries().await?;

        let changed = prune_orphaned_markers(&mut entries, &live);
        if changed > 0 {
            self.storage.save_calendar_entries(&entries).await?;
        }
        info!(changed, "Pruned calendar markers");
        Ok(changed)
    }
}

fn not_found(id: &ProgressionPlanId) -> ProgressionError {
    ProgressionError::NotFound(format!("progression plan {}", id))
}
