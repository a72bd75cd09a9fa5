//! HTTP handlers for intake endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::intake::{
    EndIntakeCommand, EndIntakeHandler, GetIntakeSessionHandler, GetIntakeSessionQuery,
    StartIntakeCommand, StartIntakeHandler, SubmitTurnCommand, SubmitTurnHandler,
};
use crate::domain::foundation::SessionId;
use crate::domain::intake::{IntakeEngine, IntakeError};
use crate::ports::SessionStore;

use super::dto::{ErrorResponse, SessionResponse, SubmitTurnRequest, SubmitTurnResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct IntakeHandlers {
    start_handler: Arc<StartIntakeHandler>,
    submit_handler: Arc<SubmitTurnHandler>,
    get_handler: Arc<GetIntakeSessionHandler>,
    end_handler: Arc<EndIntakeHandler>,
}

impl IntakeHandlers {
    pub fn new(
        start_handler: Arc<StartIntakeHandler>,
        submit_handler: Arc<SubmitTurnHandler>,
        get_handler: Arc<GetIntakeSessionHandler>,
        end_handler: Arc<EndIntakeHandler>,
    ) -> Self {
        Self {
            start_handler,
            submit_handler,
            get_handler,
            end_handler,
        }
    }

    /// Wires every intake handler to one engine and session store.
    pub fn from_parts(engine: Arc<IntakeEngine>, store: Arc<dyn SessionStore>) -> Self {
        Self::new(
            Arc::new(StartIntakeHandler::new(engine.clone(), store.clone())),
            Arc::new(SubmitTurnHandler::new(engine, store.clone())),
            Arc::new(GetIntakeSessionHandler::new(store.clone())),
            Arc::new(EndIntakeHandler::new(store)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/intake/sessions - Start a new intake session
pub async fn start_session(State(handlers): State<IntakeHandlers>) -> Response {
    match handlers.start_handler.handle(StartIntakeCommand).await {
        Ok(result) => {
            let response = SessionResponse::from(&result.session);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_intake_error(e),
    }
}

/// POST /api/intake/sessions/:id/turns - Submit a candidate turn
pub async fn submit_turn(
    State(handlers): State<IntakeHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitTurnRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitTurnCommand {
        session_id,
        text: req.text,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = SubmitTurnResponse {
                outcome: result.outcome,
                replies: result.replies.iter().map(Into::into).collect(),
                session: SessionResponse::from(&result.session),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_intake_error(e),
    }
}

/// GET /api/intake/sessions/:id - Get session transcript and record
pub async fn get_session(
    State(handlers): State<IntakeHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .get_handler
        .handle(GetIntakeSessionQuery { session_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_intake_error(e),
    }
}

/// DELETE /api/intake/sessions/:id - Discard a session
pub async fn end_session(
    State(handlers): State<IntakeHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.end_handler.handle(EndIntakeCommand { session_id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_intake_error(e),
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_intake_error(error: IntakeError) -> Response {
    match error {
        IntakeError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
        IntakeError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Intake request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An internal error occurred")),
            )
                .into_response()
        }
    }
}
