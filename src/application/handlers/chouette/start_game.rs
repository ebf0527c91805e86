//! StartGameHandler - Moves the session from setup into play.

use std::sync::Arc;

use crate::domain::foundation::PlayerId;
use crate::domain::session::{ChouetteSession, SessionError};
use crate::ports::SessionStore;

/// Command to start a game.
#[derive(Debug, Clone)]
pub enum StartGameCommand {
    /// Start with explicit seating, ignoring whatever setup holds.
    WithSeats {
        box_player: Option<PlayerId>,
        captain: Option<PlayerId>,
        queue: Vec<PlayerId>,
    },
    /// Start with the seats assigned during setup.
    FromAssignedSeats,
}

/// Handler for starting games.
pub struct StartGameHandler {
    store: Arc<dyn SessionStore>,
}

impl StartGameHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        session: &mut ChouetteSession,
        cmd: StartGameCommand,
    ) -> Result<(), SessionError> {
        match cmd {
            StartGameCommand::WithSeats {
                box_player,
                captain,
                queue,
            } => session.start_game(box_player, captain, queue)?,
            StartGameCommand::FromAssignedSeats => session.start_from_assigned_seats()?,
        }
        self.store.save(session).await?;

        tracing::info!(
            session_id = %session.id(),
            box_player = ?session.box_player(),
            captain = ?session.captain(),
            queue_len = session.queue().len(),
            "Game started"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{pid, MockSessionStore};
    use super::*;
    use crate::domain::foundation::GameMode;
    use crate::domain::session::Seat;

    #[tokio::test]
    async fn starts_with_explicit_seats() {
        let store = Arc::new(MockSessionStore::new());
        let handler = StartGameHandler::new(store.clone());
        let mut session = ChouetteSession::new();

        handler
            .handle(
                &mut session,
                StartGameCommand::WithSeats {
                    box_player: Some(pid("B")),
                    captain: Some(pid("C")),
                    queue: vec![pid("Q1")],
                },
            )
            .await
            .unwrap();

        assert_eq!(session.mode(), GameMode::Game);
        assert_eq!(session.current_scores().len(), 3);
        assert_eq!(store.saved(), vec![session]);
    }

    #[tokio::test]
    async fn starts_from_assigned_seats() {
        let store = Arc::new(MockSessionStore::new());
        let handler = StartGameHandler::new(store.clone());
        let mut session = ChouetteSession::new();
        session.assign_seat(Seat::Box, Some(pid("B"))).unwrap();
        session.assign_seat(Seat::Captain, Some(pid("C"))).unwrap();

        handler
            .handle(&mut session, StartGameCommand::FromAssignedSeats)
            .await
            .unwrap();

        assert_eq!(session.box_player(), Some(&pid("B")));
        assert_eq!(session.captain(), Some(&pid("C")));
    }

    #[tokio::test]
    async fn missing_captain_is_rejected_without_saving() {
        let store = Arc::new(MockSessionStore::new());
        let handler = StartGameHandler::new(store.clone());
        let mut session = ChouetteSession::new();

        let result = handler
            .handle(
                &mut session,
                StartGameCommand::WithSeats {
                    box_player: Some(pid("B")),
                    captain: None,
                    queue: vec![],
                },
            )
            .await;

        assert!(matches!(result, Err(SessionError::InvalidSeating(_))));
        assert_eq!(session.mode(), GameMode::Setup);
        assert!(store.saved().is_empty());
    }
}
