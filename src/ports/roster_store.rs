//! Roster Store Port - Interface to the durable list of known players.
//!
//! The session engine only reads players and hands over lifetime-score
//! deltas when a chouette ends. Everything else about the roster belongs to
//! the adapter.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::foundation::{PlayerId, ValidationError};
use crate::domain::player::{Player, PlayerName};

/// Errors that can occur during roster operations
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Player not found: {0}")]
    NotFound(PlayerId),

    #[error("Player name already exists: {0}")]
    DuplicateName(String),

    #[error("Invalid player: {0}")]
    Validation(#[from] ValidationError),

    #[error("Roster storage failed: {0}")]
    Storage(String),
}

/// Port for reading players and recording chouette results
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// All known players in registration order
    async fn all_players(&self) -> Result<Vec<Player>, RosterError>;

    /// Look up a single player
    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<Player>, RosterError>;

    /// Look up several players, keeping the order of `ids`
    ///
    /// Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[PlayerId]) -> Result<Vec<Player>, RosterError> {
        let players = self.all_players().await?;
        Ok(ids
            .iter()
            .filter_map(|id| players.iter().find(|p| &p.id == id).cloned())
            .collect())
    }

    /// Add a new player with zeroed totals
    ///
    /// # Errors
    /// `DuplicateName` if a player with the same name (ignoring case) exists
    async fn register(&self, name: PlayerName) -> Result<Player, RosterError>;

    /// Add each delta to the player's lifetime total
    ///
    /// Every non-zero delta also counts one game played. Zero deltas and
    /// unknown ids are ignored.
    ///
    /// # Returns
    /// The number of players that changed
    async fn apply_score_deltas(
        &self,
        deltas: &BTreeMap<PlayerId, i64>,
    ) -> Result<usize, RosterError>;
}
