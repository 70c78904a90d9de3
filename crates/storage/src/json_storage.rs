//! JSON file storage implementation.
//!
//! Stores each collection as one pretty-printed JSON document in a data
//! directory. Saves go through a temporary file followed by a rename, so a
//! failed write never leaves a half-written document behind.

use std::path::{Path, PathBuf};
use overload_core::{CalendarEntry, ProgressionPlan, WorkoutDay, WorkoutPlan, WorkoutSession};
use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::debug;
use super::{Storage, Result};

const PROGRESSION_PLANS: &str = "progression-plans.json";
const CALENDAR: &str = "calendar.json";
const WORKOUT_DAYS: &str = "workout-data.json";
const WORKOUT_PLANS: &str = "workout-plans.json";
const CURRENT_WORKOUT: &str = "current-workout.json";
const SESSIONS: &str = "workout-history.json";

/// File-based JSON storage backend.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        debug!(root = %root.display(), "Opened JSON storage");
        Ok(Self { root })
    }

    /// Data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, document: &str) -> PathBuf {
        self.root.join(document)
    }

    async fn load_collection<T: DeserializeOwned>(&self, document: &str) -> Result<Vec<T>> {
        let items: Option<Vec<T>> = read_json(&self.path(document)).await?;
        Ok(items.unwrap_or_default())
    }

    async fn save_collection<T: Serialize + Sync>(&self, document: &str, items: &[T]) -> Result<()> {
        write_json(&self.path(document), &items).await?;
        debug!(document, count = items.len(), "Saved collection");
        Ok(())
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn load_progression_plans(&self) -> Result<Vec<ProgressionPlan>> {
        self.load_collection(PROGRESSION_PLANS).await
    }

    async fn save_progression_plans(&mut self, plans: &[ProgressionPlan]) -> Result<()> {
        self.save_collection(PROGRESSION_PLANS, plans).await
    }

    async fn load_calendar_entries(&self) -> Result<Vec<CalendarEntry>> {
        self.load_collection(CALENDAR).await
    }

    async fn save_calendar_entries(&mut self, entries: &[CalendarEntry]) -> Result<()> {
        self.save_collection(CALENDAR, entries).await
    }

    async fn load_workout_days(&self) -> Result<Vec<WorkoutDay>> {
        self.load_collection(WORKOUT_DAYS).await
    }

    async fn save_workout_days(&mut self, days: &[WorkoutDay]) -> Result<()> {
        self.save_collection(WORKOUT_DAYS, days).await
    }

    async fn load_workout_plans(&self) -> Result<Vec<WorkoutPlan>> {
        self.load_collection(WORKOUT_PLANS).await
    }

    async fn save_workout_plans(&mut self, plans: &[WorkoutPlan]) -> Result<()> {
        self.save_collection(WORKOUT_PLANS, plans).await
    }

    async fn load_current_workout(&self) -> Result<Option<WorkoutPlan>> {
        // A stored `null` means the selection was cleared
        let stored: Option<Option<WorkoutPlan>> = read_json(&self.path(CURRENT_WORKOUT)).await?;
        Ok(stored.flatten())
    }

    async fn save_current_workout(&mut self, plan: Option<&WorkoutPlan>) -> Result<()> {
        match plan {
            Some(plan) => write_json(&self.path(CURRENT_WORKOUT), plan).await?,
            None => {
                fs::remove_file(self.path(CURRENT_WORKOUT)).await.or_else(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound { Ok(()) } else { Err(e) }
                })?;
            }
        }
        Ok(())
    }

    async fn load_sessions(&self) -> Result<Vec<WorkoutSession>> {
        self.load_collection(SESSIONS).await
    }

    async fn save_sessions(&mut self, sessions: &[WorkoutSession]) -> Result<()> {
        self.save_collection(SESSIONS, sessions).await
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json.as_bytes()).await?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use overload_core::{ExerciseProgression, ProgressionPlanId, ProgressionVariable};
    use std::collections::BTreeMap;

    fn sample_plan() -> ProgressionPlan {
        let start = NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();
        let mut exercises = BTreeMap::new();
        exercises.insert(
            "Squats".to_string(),
            ExerciseProgression {
                variable: ProgressionVariable::Weight,
                increase_amount: 2.5,
                interval_weeks: 2,
                starting_value: 185.0,
                current_value: 0.1 + 0.2,
                start_date: start,
                next_increase_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                last_increased: None,
                enabled: true,
            },
        );
        ProgressionPlan {
            id: ProgressionPlanId::new(),
            workout_id: "workout-1".into(),
            workout_name: "Demo".to_string(),
            day_id: "day-1".into(),
            day_name: "Leg Day".to_string(),
            start_date: start,
            exercises,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_missing_documents_read_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();

        assert!(storage.load_progression_plans().await.unwrap().is_empty());
        assert!(storage.load_calendar_entries().await.unwrap().is_empty());
        assert!(storage.load_current_workout().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_plan_round_trip_is_bit_identical() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let plan = sample_plan();
        storage.save_progression_plans(&[plan.clone()]).await.unwrap();
        let loaded = storage.load_progression_plans().await.unwrap();

        assert_eq!(loaded, vec![plan.clone()]);
        assert_eq!(
            loaded[0].exercises["Squats"].current_value.to_bits(),
            plan.exercises["Squats"].current_value.to_bits(),
        );
        assert!(!dir.path().join("progression-plans.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_current_workout_set_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let plan = WorkoutPlan::new("PPL");
        storage.save_current_workout(Some(&plan)).await.unwrap();
        assert_eq!(storage.load_current_workout().await.unwrap(), Some(plan));

        storage.save_current_workout(None).await.unwrap();
        assert!(storage.load_current_workout().await.unwrap().is_none());
        // Clearing twice is fine
        storage.save_current_workout(None).await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("calendar.json"), "{not json").unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();

        let err = storage.load_calendar_entries().await.unwrap_err();
        assert!(matches!(err, crate::StorageError::Json(_)));
    }

    #[tokio::test]
    async fn test_reads_null_current_workout() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("current-workout.json"), "null").unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        assert!(storage.load_current_workout().await.unwrap().is_none());
    }
}
