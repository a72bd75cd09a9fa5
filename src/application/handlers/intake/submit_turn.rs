//! SubmitTurnHandler - Command handler for applying a candidate's answer.
//!
//! Turns on one session are serialized by the session's lock: a second
//! submission waits until the first, including any question generation,
//! has finished. A request dropped while the final turn is generating
//! releases the lock without changing the session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::intake::{IntakeEngine, IntakeError, IntakeSession, TurnOutcome, Turn};
use crate::ports::SessionStore;

/// Command carrying one candidate turn.
#[derive(Debug, Clone)]
pub struct SubmitTurnCommand {
    pub session_id: SessionId,
    pub text: String,
}

/// Result of a submitted turn.
#[derive(Debug, Clone)]
pub struct SubmitTurnResult {
    pub outcome: TurnOutcome,
    /// Assistant turns produced by this submission, in display order.
    pub replies: Vec<Turn>,
    /// Session snapshot after the turn.
    pub session: IntakeSession,
}

/// Handler for submitting turns.
pub struct SubmitTurnHandler {
    engine: Arc<IntakeEngine>,
    store: Arc<dyn SessionStore>,
}

impl SubmitTurnHandler {
    pub fn new(engine: Arc<IntakeEngine>, store: Arc<dyn SessionStore>) -> Self {
        Self { engine, store }
    }

    pub async fn handle(&self, cmd: SubmitTurnCommand) -> Result<SubmitTurnResult, IntakeError> {
        let handle = self.store.get(cmd.session_id).await?;
        let mut session = handle.lock().await;

        let result = self.engine.submit(&mut session, &cmd.text).await;

        Ok(SubmitTurnResult {
            outcome: result.outcome,
            replies: result.replies,
            session: session.clone(),
        })
    }
}
