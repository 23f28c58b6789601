use thiserror::Error;

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store cannot be reached (e.g. disabled localStorage)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend rejected the operation (e.g. quota exceeded)
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("failed to serialize checklist: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialize(err.to_string())
    }
}
