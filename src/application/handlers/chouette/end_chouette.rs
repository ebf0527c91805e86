//! EndChouetteHandler - Finishes the chouette and starts a fresh session.
//!
//! Final scores go to the roster before the new session is saved. If the
//! roster rejects them, the running session is left as it was.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::{PlayerId, SessionId};
use crate::domain::session::{ChouetteSession, SessionError};
use crate::ports::{RosterStore, SessionStore};

/// Result of ending a chouette.
#[derive(Debug, Clone)]
pub struct EndChouetteResult {
    /// Id of the session that just finished.
    pub completed_session_id: SessionId,
    pub final_scores: BTreeMap<PlayerId, i64>,
    /// Number of roster entries that changed.
    pub players_updated: usize,
}

/// Handler for ending a chouette.
pub struct EndChouetteHandler {
    store: Arc<dyn SessionStore>,
    roster: Arc<dyn RosterStore>,
}

impl EndChouetteHandler {
    pub fn new(store: Arc<dyn SessionStore>, roster: Arc<dyn RosterStore>) -> Self {
        Self { store, roster }
    }

    /// Ends the chouette and replaces `session` with a fresh one.
    ///
    /// # Errors
    ///
    /// - `Roster` if the deltas could not be recorded; `session` is unchanged
    /// - `Storage` if the new session could not be saved; `session` already
    ///   holds the new session and only the save needs retrying
    pub async fn handle(
        &self,
        session: &mut ChouetteSession,
    ) -> Result<EndChouetteResult, SessionError> {
        let ended = session.clone().end_chouette();
        let players_updated = self.roster.apply_score_deltas(&ended.final_scores).await?;

        let completed_session_id = ended.completed.id().clone();
        *session = ended.new_session;
        self.store.save(session).await?;

        tracing::info!(
            completed_session_id = %completed_session_id,
            session_id = %session.id(),
            players_updated,
            "Chouette ended"
        );

        Ok(EndChouetteResult {
            completed_session_id,
            final_scores: ended.final_scores,
            players_updated,
        })
    }
}
