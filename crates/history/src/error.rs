//! History errors.

use overload_core::SessionId;
use overload_storage::StorageError;

/// Session history errors.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// Session failed validation
    #[error("invalid session: {0}")]
    InvalidSession(String),

    /// A session with this id is already logged
    #[error("session {0} already logged")]
    Duplicate(SessionId),

    /// Session missing
    #[error("session {0} not found")]
    NotFound(SessionId),

    /// Storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type alias for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;
