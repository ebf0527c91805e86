//! In-Memory Session Store Adapter
//!
//! Holds the session snapshot in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::session::ChouetteSession;
use crate::ports::{SessionStore, StorageError};

/// In-memory storage for the active session
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    session: Arc<RwLock<Option<ChouetteSession>>>,
    saves: Arc<RwLock<usize>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `session`
    pub fn with_session(session: ChouetteSession) -> Self {
        Self {
            session: Arc::new(RwLock::new(Some(session))),
            saves: Arc::new(RwLock::new(0)),
        }
    }

    /// The stored snapshot, if any
    pub async fn snapshot(&self) -> Option<ChouetteSession> {
        self.session.read().await.clone()
    }

    /// Number of successful saves (useful for tests)
    pub async fn save_count(&self) -> usize {
        *self.saves.read().await
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<ChouetteSession>, StorageError> {
        Ok(self.session.read().await.clone())
    }

    async fn save(&self, session: &ChouetteSession) -> Result<(), StorageError> {
        *self.session.write().await = Some(session.clone());
        *self.saves.write().await += 1;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.session.write().await = None;
        Ok(())
    }
}
