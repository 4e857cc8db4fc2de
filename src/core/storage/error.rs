//! Error types for the card store.

use thiserror::Error;

/// Unified error type for card store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error reading or writing the cards file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The cards file is not a valid list of card records.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The temporary file could not be moved over the cards file.
    #[error("Failed to replace cards file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
