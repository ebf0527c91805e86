//! Mock ports shared by the handler tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::foundation::PlayerId;
use crate::domain::player::{Player, PlayerName};
use crate::domain::session::ChouetteSession;
use crate::ports::{RosterError, RosterStore, SessionStore, StorageError};

pub(super) fn pid(s: &str) -> PlayerId {
    PlayerId::new(s).unwrap()
}

pub(super) struct MockSessionStore {
    stored: Mutex<Option<ChouetteSession>>,
    saved: Mutex<Vec<ChouetteSession>>,
    fail_save: bool,
    fail_load: bool,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self {
            stored: Mutex::new(None),
            saved: Mutex::new(Vec::new()),
            fail_save: false,
            fail_load: false,
        }
    }

    pub fn holding(session: ChouetteSession) -> Self {
        let store = Self::new();
        *store.stored.lock().unwrap() = Some(session);
        store
    }

    pub fn failing_save() -> Self {
        Self {
            fail_save: true,
            ..Self::new()
        }
    }

    pub fn failing_load() -> Self {
        Self {
            fail_load: true,
            ..Self::new()
        }
    }

    pub fn saved(&self) -> Vec<ChouetteSession> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn load(&self) -> Result<Option<ChouetteSession>, StorageError> {
        if self.fail_load {
            return Err(StorageError::DeserializationFailed(
                "Simulated load failure".to_string(),
            ));
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, session: &ChouetteSession) -> Result<(), StorageError> {
        if self.fail_save {
            return Err(StorageError::IoError("Simulated save failure".to_string()));
        }
        *self.stored.lock().unwrap() = Some(session.clone());
        self.saved.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}

pub(super) struct MockRosterStore {
    applied: Mutex<Vec<BTreeMap<PlayerId, i64>>>,
    fail: bool,
}

impl MockRosterStore {
    pub fn new() -> Self {
        Self {
            applied: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            applied: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn applied(&self) -> Vec<BTreeMap<PlayerId, i64>> {
        self.applied.lock().unwrap().clone()
    }
}

#[async_trait]
impl RosterStore for MockRosterStore {
    async fn all_players(&self) -> Result<Vec<Player>, RosterError> {
        Ok(vec![])
    }

    async fn find_by_id(&self, _id: &PlayerId) -> Result<Option<Player>, RosterError> {
        Ok(None)
    }

    async fn register(&self, name: PlayerName) -> Result<Player, RosterError> {
        Ok(Player::new(PlayerId::generate(), name))
    }

    async fn apply_score_deltas(
        &self,
        deltas: &BTreeMap<PlayerId, i64>,
    ) -> Result<usize, RosterError> {
        if self.fail {
            return Err(RosterError::Storage("Simulated roster failure".to_string()));
        }
        self.applied.lock().unwrap().push(deltas.clone());
        Ok(deltas.values().filter(|d| **d != 0).count())
    }
}
