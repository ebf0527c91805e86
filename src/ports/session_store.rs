//! Session Store Port - Interface for persisting the active chouette session.
//!
//! There is exactly one active session, so the store holds a single keyed
//! record that is overwritten as a whole on every save.

use async_trait::async_trait;

use crate::domain::session::ChouetteSession;

/// Errors that can occur during session storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("Stored session is corrupt: {0}")]
    Corrupt(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and restoring the active session snapshot
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored session
    ///
    /// # Returns
    /// `None` when nothing has been stored yet
    ///
    /// # Errors
    /// Returns `StorageError` if the record exists but cannot be read
    async fn load(&self) -> Result<Option<ChouetteSession>, StorageError>;

    /// Overwrite the stored session with `session`
    async fn save(&self, session: &ChouetteSession) -> Result<(), StorageError>;

    /// Remove the stored session, if any
    async fn clear(&self) -> Result<(), StorageError>;
}
