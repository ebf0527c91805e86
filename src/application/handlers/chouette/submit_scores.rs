//! SubmitScoresHandler - Applies one round and rotates seats.

use std::sync::Arc;

use crate::domain::session::{ChouetteSession, RoundOutcome, RoundScores, ScoringPolicy, SessionError};
use crate::ports::SessionStore;

/// Command carrying the scores entered for one finished game.
#[derive(Debug, Clone)]
pub struct SubmitScoresCommand {
    pub scores: RoundScores,
}

/// Handler for score submission.
///
/// The scoring policy is fixed per deployment and comes from configuration.
pub struct SubmitScoresHandler {
    store: Arc<dyn SessionStore>,
    policy: ScoringPolicy,
}

impl SubmitScoresHandler {
    pub fn new(store: Arc<dyn SessionStore>, policy: ScoringPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    pub async fn handle(
        &self,
        session: &mut ChouetteSession,
        cmd: SubmitScoresCommand,
    ) -> Result<RoundOutcome, SessionError> {
        let outcome = session.submit_scores(&cmd.scores, self.policy)?;
        self.store.save(session).await?;

        tracing::info!(
            box_score = outcome.box_score,
            captain_score = outcome.captain_score,
            rotation = ?outcome.rotation,
            box_player = ?session.box_player(),
            captain = ?session.captain(),
            "Round scored"
        );
        Ok(outcome)
    }
}
