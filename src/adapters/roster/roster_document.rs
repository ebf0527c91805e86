//! Roster document shared by the roster adapters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::PlayerId;
use crate::domain::player::{Player, PlayerName};
use crate::ports::RosterError;

/// The whole roster as persisted: `{ "players": [...] }`.
///
/// Reads also accept a bare array of players, the layout earlier front ends
/// wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredRoster")]
pub(super) struct RosterDocument {
    pub players: Vec<Player>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredRoster {
    Bare(Vec<Player>),
    Wrapped {
        #[serde(default)]
        players: Vec<Player>,
    },
}

impl From<StoredRoster> for RosterDocument {
    fn from(stored: StoredRoster) -> Self {
        match stored {
            StoredRoster::Bare(players) | StoredRoster::Wrapped { players } => Self { players },
        }
    }
}

impl RosterDocument {
    pub fn find(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn register(&mut self, name: PlayerName) -> Result<Player, RosterError> {
        if self.players.iter().any(|p| p.name.matches(name.as_str())) {
            return Err(RosterError::DuplicateName(name.to_string()));
        }

        let player = Player::new(PlayerId::generate(), name);
        self.players.push(player.clone());
        Ok(player)
    }

    pub fn apply_score_deltas(&mut self, deltas: &BTreeMap<PlayerId, i64>) -> usize {
        let mut changed = 0;
        for player in &mut self.players {
            if let Some(delta) = deltas.get(&player.id) {
                if player.record_chouette(*delta) {
                    changed += 1;
                }
            }
        }
        changed
    }
}
