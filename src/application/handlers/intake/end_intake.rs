//! EndIntakeHandler - Command handler for discarding a session.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::intake::IntakeError;
use crate::ports::SessionStore;

/// Command to discard a session and everything captured in it.
#[derive(Debug, Clone)]
pub struct EndIntakeCommand {
    pub session_id: SessionId,
}

/// Handler for discarding sessions.
pub struct EndIntakeHandler {
    store: Arc<dyn SessionStore>,
}

impl EndIntakeHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EndIntakeCommand) -> Result<(), IntakeError> {
        self.store.remove(cmd.session_id).await?;
        info!(session_id = %cmd.session_id, "Intake session discarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::intake::test_support::{engine, store};
    use crate::application::handlers::intake::{StartIntakeCommand, StartIntakeHandler};

    #[tokio::test]
    async fn removes_stored_session() {
        let store = store();
        let started = StartIntakeHandler::new(engine(), store.clone())
            .handle(StartIntakeCommand)
            .await
            .unwrap();
        let handler = EndIntakeHandler::new(store.clone());

        handler
            .handle(EndIntakeCommand {
                session_id: started.session.id(),
            })
            .await
            .unwrap();

        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn ending_twice_is_not_found() {
        let handler = EndIntakeHandler::new(store());
        let session_id = SessionId::new();

        let result = handler.handle(EndIntakeCommand { session_id }).await;

        assert_eq!(result, Err(IntakeError::NotFound(session_id)));
    }
}
