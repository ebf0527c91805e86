//! File-based Roster Store Adapter
//!
//! Persists the roster as `{ "players": [...] }` in a single JSON file.
//! A bare array of players is also accepted on read.
//! Every mutation rewrites the file through a temporary sibling.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use super::roster_document::RosterDocument;
use crate::domain::foundation::PlayerId;
use crate::domain::player::{Player, PlayerName};
use crate::ports::{RosterError, RosterStore};

/// File-based roster
#[derive(Debug)]
pub struct FileRosterStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileRosterStore {
    /// Create a roster backed by the file at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the roster file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<RosterDocument, RosterError> {
        if !self.path.exists() {
            return Ok(RosterDocument::default());
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| RosterError::Storage(format!("Failed to read roster: {}", e)))?;

        serde_json::from_str(&json)
            .map_err(|e| RosterError::Storage(format!("Failed to parse roster: {}", e)))
    }

    async fn write_document(&self, document: &RosterDocument) -> Result<(), RosterError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    RosterError::Storage(format!("Failed to create directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| RosterError::Storage(format!("Failed to serialize roster: {}", e)))?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json)
            .await
            .map_err(|e| RosterError::Storage(format!("Failed to write roster: {}", e)))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| RosterError::Storage(format!("Failed to rename roster: {}", e)))
    }
}

#[async_trait]
impl RosterStore for FileRosterStore {
    async fn all_players(&self) -> Result<Vec<Player>, RosterError> {
        Ok(self.read_document().await?.players)
    }

    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<Player>, RosterError> {
        Ok(self.read_document().await?.find(id).cloned())
    }

    async fn register(&self, name: PlayerName) -> Result<Player, RosterError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        let player = document.register(name)?;
        self.write_document(&document).await?;

        tracing::info!(player_id = %player.id, name = %player.name, "Registered player");
        Ok(player)
    }

    async fn apply_score_deltas(
        &self,
        deltas: &BTreeMap<PlayerId, i64>,
    ) -> Result<usize, RosterError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        let changed = document.apply_score_deltas(deltas);
        if changed > 0 {
            self.write_document(&document).await?;
        }
        Ok(changed)
    }
}
