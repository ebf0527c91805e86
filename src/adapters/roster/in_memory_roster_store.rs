//! In-Memory Roster Store Adapter
//!
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::roster_document::RosterDocument;
use crate::domain::foundation::PlayerId;
use crate::domain::player::{Player, PlayerName};
use crate::ports::{RosterError, RosterStore};

/// In-memory roster
#[derive(Debug, Clone, Default)]
pub struct InMemoryRosterStore {
    roster: Arc<RwLock<RosterDocument>>,
}

impl InMemoryRosterStore {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster pre-populated with `players`
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            roster: Arc::new(RwLock::new(RosterDocument { players })),
        }
    }

    /// Number of registered players (useful for tests)
    pub async fn count(&self) -> usize {
        self.roster.read().await.players.len()
    }
}

#[async_trait]
impl RosterStore for InMemoryRosterStore {
    async fn all_players(&self) -> Result<Vec<Player>, RosterError> {
        Ok(self.roster.read().await.players.clone())
    }

    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<Player>, RosterError> {
        Ok(self.roster.read().await.find(id).cloned())
    }

    async fn register(&self, name: PlayerName) -> Result<Player, RosterError> {
        self.roster.write().await.register(name)
    }

    async fn apply_score_deltas(
        &self,
        deltas: &BTreeMap<PlayerId, i64>,
    ) -> Result<usize, RosterError> {
        Ok(self.roster.write().await.apply_score_deltas(deltas))
    }
}
