//! HTTP routes for intake endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{end_session, get_session, start_session, submit_turn, IntakeHandlers};

/// Creates the intake router with all endpoints.
pub fn intake_routes(handlers: IntakeHandlers) -> Router {
    Router::new()
        .route("/", post(start_session))
        .route("/:id", get(get_session).delete(end_session))
        .route("/:id/turns", post(submit_turn))
        .with_state(handlers)
}
