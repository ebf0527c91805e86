//! RestoreSessionHandler - Loads the active session at startup.
//!
//! A missing, unreadable or already completed snapshot is replaced by a
//! fresh setup session, which is saved immediately.

use std::sync::Arc;

use crate::domain::session::{ChouetteSession, SessionError};
use crate::ports::SessionStore;

/// Result of restoring the session.
#[derive(Debug, Clone)]
pub struct RestoreSessionResult {
    pub session: ChouetteSession,
    /// False when a fresh session had to be created.
    pub restored: bool,
}

/// Handler for restoring the active session.
pub struct RestoreSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl RestoreSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<RestoreSessionResult, SessionError> {
        match self.store.load().await {
            Ok(Some(session)) if session.is_complete() => tracing::debug!(
                session_id = %session.id(),
                "Stored session is complete, starting fresh"
            ),
            Ok(Some(session)) => {
                tracing::info!(
                    session_id = %session.id(),
                    mode = %session.mode(),
                    "Restored session"
                );
                return Ok(RestoreSessionResult {
                    session,
                    restored: true,
                });
            }
            Ok(None) => tracing::debug!("No stored session"),
            Err(error) => {
                tracing::warn!(%error, "Stored session could not be loaded, starting fresh")
            }
        }

        let session = ChouetteSession::new();
        self.store.save(&session).await?;
        tracing::info!(session_id = %session.id(), "Created session");

        Ok(RestoreSessionResult {
            session,
            restored: false,
        })
    }
}
