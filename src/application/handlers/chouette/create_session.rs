//! CreateSessionHandler - Replaces the active session with a fresh one.

use std::sync::Arc;

use crate::domain::session::{ChouetteSession, SessionError};
use crate::ports::SessionStore;

/// Handler for starting over with an empty setup session.
pub struct CreateSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl CreateSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Creates and persists a new session, returning it.
    ///
    /// Whatever was stored before is overwritten without touching the roster.
    pub async fn handle(&self) -> Result<ChouetteSession, SessionError> {
        let session = ChouetteSession::new();
        self.store.save(&session).await?;
        tracing::info!(session_id = %session.id(), "Created session");
        Ok(session)
    }
}
