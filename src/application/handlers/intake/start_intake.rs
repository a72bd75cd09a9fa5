//! StartIntakeHandler - Command handler for opening an intake session.

use std::sync::Arc;

use tracing::info;

use crate::domain::intake::{IntakeEngine, IntakeError, IntakeSession};
use crate::ports::SessionStore;

/// Command to start a new intake session.
#[derive(Debug, Clone, Default)]
pub struct StartIntakeCommand;

/// Result of starting a session.
#[derive(Debug, Clone)]
pub struct StartIntakeResult {
    /// Snapshot of the new session, opening prompt included.
    pub session: IntakeSession,
}

/// Handler for starting intake sessions.
pub struct StartIntakeHandler {
    engine: Arc<IntakeEngine>,
    store: Arc<dyn SessionStore>,
}

impl StartIntakeHandler {
    pub fn new(engine: Arc<IntakeEngine>, store: Arc<dyn SessionStore>) -> Self {
        Self { engine, store }
    }

    pub async fn handle(&self, _cmd: StartIntakeCommand) -> Result<StartIntakeResult, IntakeError> {
        let session = self.engine.create_session();
        let snapshot = session.clone();

        self.store.insert(session).await?;
        info!(session_id = %snapshot.id(), "Intake session stored");

        Ok(StartIntakeResult { session: snapshot })
    }
}
