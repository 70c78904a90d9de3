//! Routine errors.

use overload_storage::StorageError;

/// Routine library errors.
#[derive(Debug, thiserror::Error)]
pub enum RoutineError {
    /// Blank day or plan name
    #[error("Please enter a name")]
    EmptyName,

    /// Week outside 1..=2
    #[error("week must be 1 or 2, got {0}")]
    InvalidWeek(u8),

    /// Weekday outside 1..=7
    #[error("weekday must be 1 (Monday) to 7 (Sunday), got {0}")]
    InvalidWeekday(u8),

    /// Record missing
    #[error("{0} not found")]
    NotFound(String),

    /// Storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type alias for routine operations.
pub type Result<T> = std::result::Result<T, RoutineError>;
