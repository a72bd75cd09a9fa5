//! HTTP DTOs for intake endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::intake::{
    CandidateRecord, GeneratedQuestionSet, IntakeSession, SessionStatus, Turn, TurnOutcome,
    TurnRole,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request carrying one candidate turn.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitTurnRequest {
    #[serde(default)]
    pub text: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnResponse {
    pub role: TurnRole,
    pub content: String,
    pub at: String,
}

impl From<&Turn> for TurnResponse {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role,
            content: turn.content.clone(),
            at: turn.at.as_datetime().to_rfc3339(),
        }
    }
}

/// Full session view for display.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub status: SessionStatus,
    pub current_stage_index: usize,
    pub record: CandidateRecord,
    pub transcript: Vec<TurnResponse>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub question_sets: Vec<GeneratedQuestionSet>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&IntakeSession> for SessionResponse {
    fn from(session: &IntakeSession) -> Self {
        Self {
            id: session.id().to_string(),
            status: session.status(),
            current_stage_index: session.current_stage_index(),
            record: session.record().clone(),
            transcript: session.transcript().turns().iter().map(Into::into).collect(),
            question_sets: session.question_sets().to_vec(),
            created_at: session.created_at().as_datetime().to_rfc3339(),
            updated_at: session.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Result of submitting a turn.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitTurnResponse {
    pub outcome: TurnOutcome,
    pub replies: Vec<TurnResponse>,
    pub session: SessionResponse,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
