//! In-Memory Session Store Adapter
//!
//! Keeps live intake sessions in a process-local map. Nothing is persisted;
//! sessions vanish when removed, when evicted as expired, or when the
//! process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::intake::{IntakeSession, SessionRetention};
use crate::ports::{SessionHandle, SessionStore, SessionStoreError};

/// In-memory storage for live intake sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionHandle>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: IntakeSession) -> Result<SessionHandle, SessionStoreError> {
        let id = session.id();
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&id) {
            return Err(SessionStoreError::AlreadyExists(id));
        }
        let handle = Arc::new(Mutex::new(session));
        sessions.insert(id, handle.clone());
        Ok(handle)
    }

    async fn get(&self, id: SessionId) -> Result<SessionHandle, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(id))
    }

    async fn remove(&self, id: SessionId) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(SessionStoreError::NotFound(id))
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn evict_expired(&self, retention: &SessionRetention) -> usize {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        // A locked session is mid-turn and therefore not idle.
        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => !session.is_expired(now, retention),
            Err(_) => true,
        });
        before - sessions.len()
    }
}
