//! Session Store Port - Interface for holding live intake sessions.
//!
//! Sessions live only for the lifetime of the process and are evicted once
//! they outlive their retention window. Each stored session sits behind its
//! own async mutex so turns on one session are applied one at a time while
//! other sessions proceed independently.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::SessionId;
use crate::domain::intake::{IntakeSession, SessionRetention};

/// Shared, lockable handle to one live session.
pub type SessionHandle = Arc<Mutex<IntakeSession>>;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Session already exists: {0}")]
    AlreadyExists(SessionId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for storing and looking up live intake sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a new session and return its handle.
    ///
    /// # Errors
    /// Returns `SessionStoreError::AlreadyExists` if the id is taken
    async fn insert(&self, session: IntakeSession) -> Result<SessionHandle, SessionStoreError>;

    /// Look up a session handle by id.
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session has the id
    async fn get(&self, id: SessionId) -> Result<SessionHandle, SessionStoreError>;

    /// Discard a session.
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session has the id
    async fn remove(&self, id: SessionId) -> Result<(), SessionStoreError>;

    /// Number of live sessions.
    async fn count(&self) -> usize;

    /// Drop every session that has outlived `retention`, returning how many
    /// were removed. Sessions with a turn in flight are kept.
    async fn evict_expired(&self, retention: &SessionRetention) -> usize;
}
