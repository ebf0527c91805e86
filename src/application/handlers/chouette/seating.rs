//! Seating handlers - Seat edits, queue changes and sitting out.
//!
//! Each handler mutates the caller's session and persists it. A rejected
//! command leaves both the session and the store untouched.

use std::sync::Arc;

use crate::domain::foundation::PlayerId;
use crate::domain::session::{ChouetteSession, Seat, SessionError};
use crate::ports::SessionStore;

/// Command to set or clear the Box or Captain seat during setup.
#[derive(Debug, Clone)]
pub struct AssignSeatCommand {
    pub seat: Seat,
    pub player: Option<PlayerId>,
}

/// Handler for assigning seats.
pub struct AssignSeatHandler {
    store: Arc<dyn SessionStore>,
}

impl AssignSeatHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        session: &mut ChouetteSession,
        cmd: AssignSeatCommand,
    ) -> Result<(), SessionError> {
        session.assign_seat(cmd.seat, cmd.player.clone())?;
        self.store.save(session).await?;

        tracing::debug!(seat = %cmd.seat, player = ?cmd.player, "Assigned seat");
        Ok(())
    }
}

/// Command to replace the queue order.
#[derive(Debug, Clone)]
pub struct SetQueueCommand {
    pub queue: Vec<PlayerId>,
}

/// Handler for reordering or extending the queue.
pub struct SetQueueHandler {
    store: Arc<dyn SessionStore>,
}

impl SetQueueHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        session: &mut ChouetteSession,
        cmd: SetQueueCommand,
    ) -> Result<(), SessionError> {
        session.set_queue(cmd.queue)?;
        self.store.save(session).await?;

        tracing::debug!(queue_len = session.queue().len(), "Updated queue");
        Ok(())
    }
}

/// Command to flip a player's sitting-out flag.
#[derive(Debug, Clone)]
pub struct ToggleSittingOutCommand {
    pub player: PlayerId,
}

/// Handler for sitting players out of the next round.
pub struct ToggleSittingOutHandler {
    store: Arc<dyn SessionStore>,
}

impl ToggleSittingOutHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns whether the player is now sitting out.
    pub async fn handle(
        &self,
        session: &mut ChouetteSession,
        cmd: ToggleSittingOutCommand,
    ) -> Result<bool, SessionError> {
        let sitting_out = session.toggle_sitting_out(&cmd.player)?;
        self.store.save(session).await?;

        tracing::debug!(player = %cmd.player, sitting_out, "Toggled sitting out");
        Ok(sitting_out)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{pid, MockSessionStore};
    use super::*;

    fn game_session() -> ChouetteSession {
        let mut session = ChouetteSession::new();
        session
            .start_game(Some(pid("B")), Some(pid("C")), vec![pid("Q1")])
            .unwrap();
        session
    }

    #[tokio::test]
    async fn assign_seat_persists() {
        let store = Arc::new(MockSessionStore::new());
        let handler = AssignSeatHandler::new(store.clone());
        let mut session = ChouetteSession::new();

        handler
            .handle(
                &mut session,
                AssignSeatCommand {
                    seat: Seat::Box,
                    player: Some(pid("B")),
                },
            )
            .await
            .unwrap();

        assert_eq!(session.box_player(), Some(&pid("B")));
        assert_eq!(store.saved(), vec![session]);
    }

    #[tokio::test]
    async fn assign_seat_during_game_is_rejected_without_saving() {
        let store = Arc::new(MockSessionStore::new());
        let handler = AssignSeatHandler::new(store.clone());
        let mut session = game_session();
        let before = session.clone();

        let result = handler
            .handle(
                &mut session,
                AssignSeatCommand {
                    seat: Seat::Captain,
                    player: Some(pid("X")),
                },
            )
            .await;

        assert!(matches!(result, Err(SessionError::InvalidState(_))));
        assert_eq!(session, before);
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn set_queue_adds_latecomer_during_game() {
        let store = Arc::new(MockSessionStore::new());
        let handler = SetQueueHandler::new(store.clone());
        let mut session = game_session();

        handler
            .handle(
                &mut session,
                SetQueueCommand {
                    queue: vec![pid("Q1"), pid("Q2")],
                },
            )
            .await
            .unwrap();

        assert_eq!(session.score_of(&pid("Q2")), Some(0));
        assert_eq!(store.saved().len(), 1);
    }

    #[tokio::test]
    async fn set_queue_rejects_duplicates() {
        let store = Arc::new(MockSessionStore::new());
        let handler = SetQueueHandler::new(store.clone());
        let mut session = ChouetteSession::new();

        let result = handler
            .handle(
                &mut session,
                SetQueueCommand {
                    queue: vec![pid("Q1"), pid("Q1")],
                },
            )
            .await;

        assert!(matches!(result, Err(SessionError::DuplicateSeat(_))));
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn toggle_sitting_out_returns_new_flag() {
        let store = Arc::new(MockSessionStore::new());
        let handler = ToggleSittingOutHandler::new(store.clone());
        let mut session = game_session();
        let cmd = ToggleSittingOutCommand { player: pid("Q1") };

        assert!(handler.handle(&mut session, cmd.clone()).await.unwrap());
        assert!(!handler.handle(&mut session, cmd).await.unwrap());
        assert_eq!(store.saved().len(), 2);
    }

    #[tokio::test]
    async fn save_failure_surfaces_after_mutation() {
        let handler = ToggleSittingOutHandler::new(Arc::new(MockSessionStore::failing_save()));
        let mut session = game_session();

        let result = handler
            .handle(&mut session, ToggleSittingOutCommand { player: pid("C") })
            .await;

        assert!(matches!(result, Err(SessionError::Storage(_))));
        assert!(session.is_sitting_out(&pid("C")));
    }
}
