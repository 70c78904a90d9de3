//! Session log service.

use async_trait::async_trait;
use overload_core::{SessionId, WorkoutSession};
use overload_storage::Storage;
use tracing::info;
use crate::filter::SessionFilter;
use crate::{HistoryError, Result};

/// Logged workout sessions.
#[async_trait]
pub trait SessionLog: Send + Sync {
    /// Record a completed session.
    ///
    /// Exercise names are trimmed and must not be blank.
    async fn log_session(&mut self, session: WorkoutSession) -> Result<WorkoutSession>;

    /// All sessions in logged order.
    async fn list_sessions(&self) -> Result<Vec<WorkoutSession>>;

    /// Sessions passing `filter`, oldest first.
    async fn sessions(&self, filter: &SessionFilter) -> Result<Vec<WorkoutSession>>;

    /// Remove a session.
    async fn delete_session(&mut self, id: &SessionId) -> Result<WorkoutSession>;
}

/// Session log backed by a [`Storage`] implementation.
pub struct BasicSessionLog<S: Storage> {
    storage: S,
}

impl<S: Storage> BasicSessionLog<S> {
    /// Create a new session log.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S: Storage + 'static> SessionLog for BasicSessionLog<S> {
    async fn log_session(&mut self, mut session: WorkoutSession) -> Result<WorkoutSession> {
        for exercise in &mut session.exercises {
            exercise.name = exercise.name.trim().to_string();
            if exercise.name.is_empty() {
                return Err(HistoryError::InvalidSession(
                    "exercise name must not be blank".to_string(),
                ));
            }
        }

        let mut sessions = self.storage.load_sessions().await?;
        if sessions.iter().any(|s| s.id == session.id) {
            return Err(HistoryError::Duplicate(session.id));
        }
        sessions.push(session.clone());
        self.storage.save_sessions(&sessions).await?;

        info!(
            session = %session.id,
            day = %session.day_name,
            date = %session.date,
            exercises = session.exercises.len(),
            "Logged session"
        );
        Ok(session)
    }

    async fn list_sessions(&self) -> Result<Vec<WorkoutSession>> {
        Ok(self.storage.load_sessions().await?)
    }

    async fn sessions(&self, filter: &SessionFilter) -> Result<Vec<WorkoutSession>> {
        let all = self.storage.load_sessions().await?;
        Ok(filter.apply(&all).into_iter().cloned().collect())
    }

    async fn delete_session(&mut self, id: &SessionId) -> Result<WorkoutSession> {
        let mut sessions = self.storage.load_sessions().await?;
        let index = sessions
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.clone()))?;
        let removed = sessions.remove(index);

        self.storage.save_sessions(&sessions).await?;
        info!(session = %id, "Deleted session");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lift, session};
    use overload_storage::MemoryStorage;

    #[tokio::test]
    async fn test_log_and_filter() {
        let mut log = BasicSessionLog::new(MemoryStorage::new());
        log.log_session(session("w1", "legs", "2024-01-08", vec![lift(" Squats ", 185.0, 5, 3)]))
            .await
            .unwrap();
        log.log_session(session("w2", "arms", "2024-01-03", vec![])).await.unwrap();
        log.log_session(session("w1", "legs", "2024-01-01", vec![])).await.unwrap();

        let all = log.list_sessions().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].exercises[0].name, "Squats");

        let w1 = log.sessions(&SessionFilter::workout("w1".into())).await.unwrap();
        assert_eq!(w1.len(), 2);
        assert!(w1[0].date < w1[1].date);
    }

    #[tokio::test]
    async fn test_rejects_bad_sessions() {
        let mut log = BasicSessionLog::new(MemoryStorage::new());

        let blank = session("w1", "legs", "2024-01-01", vec![lift("  ", 100.0, 5, 3)]);
        assert!(matches!(log.log_session(blank).await, Err(HistoryError::InvalidSession(_))));

        let logged = log.log_session(session("w1", "legs", "2024-01-01", vec![])).await.unwrap();
        assert!(matches!(log.log_session(logged).await, Err(HistoryError::Duplicate(_))));
        assert_eq!(log.list_sessions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let mut log = BasicSessionLog::new(MemoryStorage::new());
        let logged = log.log_session(session("w1", "legs", "2024-01-01", vec![])).await.unwrap();

        log.delete_session(&logged.id).await.unwrap();

        assert!(log.list_sessions().await.unwrap().is_empty());
        assert!(matches!(log.delete_session(&logged.id).await, Err(HistoryError::NotFound(_))));
    }
}
