//! Persisted layout of a chouette session.
//!
//! The record is flat, with optional seats and a mode flag, so that stored
//! sessions stay readable by older front ends. Loading turns it back into
//! the tagged [`Table`], rejecting in-game records whose seating breaks the
//! invariants.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::table::{GameTable, SetupTable, Table};
use super::{ChouetteSession, SessionError};
use crate::domain::foundation::{GameMode, PlayerId, SessionId, Timestamp};

/// Stored form of [`ChouetteSession`].
///
/// `teamCaptainPlayerId`, `teamPlayerIds` and `gameMode` are accepted on
/// read for sessions written with the team naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: SessionId,
    pub created_at: Timestamp,
    #[serde(alias = "gameMode")]
    pub mode: GameMode,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub box_player_id: Option<PlayerId>,
    #[serde(default, alias = "teamCaptainPlayerId")]
    pub captain_player_id: Option<PlayerId>,
    #[serde(default, alias = "teamPlayerIds")]
    pub queue_player_ids: Vec<PlayerId>,
    #[serde(default)]
    pub current_chouette_scores: BTreeMap<PlayerId, i64>,
    #[serde(default)]
    pub players_sitting_out: BTreeMap<PlayerId, bool>,
}

impl From<&ChouetteSession> for SessionRecord {
    fn from(session: &ChouetteSession) -> Self {
        let (scores, sitting_out) = match session.game() {
            Some(game) => (game.scores().clone(), game.sitting_out().clone()),
            None => (BTreeMap::new(), BTreeMap::new()),
        };
        Self {
            id: session.id().clone(),
            created_at: *session.created_at(),
            mode: session.mode(),
            is_complete: session.is_complete(),
            box_player_id: session.box_player().cloned(),
            captain_player_id: session.captain().cloned(),
            queue_player_ids: session.queue().to_vec(),
            current_chouette_scores: scores,
            players_sitting_out: sitting_out,
        }
    }
}

impl TryFrom<SessionRecord> for ChouetteSession {
    type Error = SessionError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let table = match record.mode {
            GameMode::Setup => Table::Setup(SetupTable {
                box_player: record.box_player_id,
                captain: record.captain_player_id,
                queue: record.queue_player_ids,
            }),
            GameMode::Game => Table::Game(GameTable::restore(
                record.box_player_id,
                record.captain_player_id,
                record.queue_player_ids,
                &record.current_chouette_scores,
                &record.players_sitting_out,
            )?),
        };
        Ok(ChouetteSession::reconstitute(
            record.id,
            record.created_at,
            record.is_complete,
            table,
        ))
    }
}
