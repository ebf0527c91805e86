//! File-based Session Store Adapter
//!
//! Keeps the active session as a single JSON document on disk. Saves write a
//! temporary sibling first and rename it over the old file, so a crash never
//! leaves a half-written session behind.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::session::{ChouetteSession, SessionRecord};
use crate::ports::{SessionStore, StorageError};

/// File-based storage for the active session
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by the file at `path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSessionStore::new("./data/chouette_session.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .await
                .map_err(|e| StorageError::IoError(e.to_string())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<ChouetteSession>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        let record: SessionRecord = serde_json::from_str(&json)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;

        let session = ChouetteSession::try_from(record)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), session_id = %session.id(), "Loaded session");
        Ok(Some(session))
    }

    async fn save(&self, session: &ChouetteSession) -> Result<(), StorageError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(&SessionRecord::from(session))
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), session_id = %session.id(), "Saved session");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .await
                .map_err(|e| StorageError::IoError(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PlayerId;
    use crate::domain::session::{RoundScores, ScoringPolicy};
    use tempfile::TempDir;

    fn pid(s: &str) -> PlayerId {
        PlayerId::new(s).unwrap()
    }

    fn store(dir: &TempDir) -> FileSessionStore {
        FileSessionStore::new(dir.path().join("nested").join("chouette_session.json"))
    }

    #[tokio::test]
    async fn load_without_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_restores_game() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let mut session = ChouetteSession::new();
        session
            .start_game(Some(pid("B")), Some(pid("C")), vec![pid("Q1")])
            .unwrap();
        let round: RoundScores = [(pid("C"), 2)].into_iter().collect();
        session.submit_scores(&round, ScoringPolicy::DerivedBox).unwrap();

        store.save(&session).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();

        assert_eq!(loaded, session);
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn save_overwrites_previous_session() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        store.save(&ChouetteSession::new()).await.unwrap();
        let second = ChouetteSession::new();
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.id(), second.id());
    }

    #[tokio::test]
    async fn garbage_file_is_a_deserialization_error() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.ensure_parent_dir().await.unwrap();
        fs::write(store.path(), "{ not json").await.unwrap();

        assert!(matches!(
            store.load().await,
            Err(StorageError::DeserializationFailed(_))
        ));
    }

    #[tokio::test]
    async fn invalid_seating_is_reported_as_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.ensure_parent_dir().await.unwrap();
        let json = r#"{
            "id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff",
            "createdAt": "2024-05-01T19:00:00Z",
            "mode": "game",
            "boxPlayerId": "B",
            "captainPlayerId": "B"
        }"#;
        fs::write(store.path(), json).await.unwrap();

        assert!(matches!(store.load().await, Err(StorageError::Corrupt(_))));
    }

    #[tokio::test]
    async fn clear_removes_the_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&ChouetteSession::new()).await.unwrap();

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        // Clearing twice is fine.
        store.clear().await.unwrap();
    }
}
