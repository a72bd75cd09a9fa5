//! GetIntakeSessionHandler - Query handler for reading a session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::intake::{IntakeError, IntakeSession};
use crate::ports::SessionStore;

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetIntakeSessionQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving session snapshots.
pub struct GetIntakeSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetIntakeSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetIntakeSessionQuery) -> Result<IntakeSession, IntakeError> {
        let handle = self.store.get(query.session_id).await?;
        let session = handle.lock().await;
        Ok(session.clone())
    }
}
