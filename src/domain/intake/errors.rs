//! Intake-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::SessionStoreError;

/// Errors surfaced to callers of the intake handlers.
///
/// Answer rejections and generation failures are not errors; they are
/// ordinary turn outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// Session was not found.
    NotFound(SessionId),
    /// Infrastructure error.
    Infrastructure(String),
}

impl IntakeError {
    pub fn not_found(id: SessionId) -> Self {
        IntakeError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        IntakeError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            IntakeError::NotFound(_) => ErrorCode::SessionNotFound,
            IntakeError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            IntakeError::NotFound(id) => format!("Session not found: {}", id),
            IntakeError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for IntakeError {}

impl From<SessionStoreError> for IntakeError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => IntakeError::NotFound(id),
            other => IntakeError::Infrastructure(other.to_string()),
        }
    }
}

impl From<IntakeError> for DomainError {
    fn from(err: IntakeError) -> Self {
        let code = err.code();
        let error = DomainError::new(code, err.message());
        match err {
            IntakeError::NotFound(id) => error.with_detail("session_id", id.to_string()),
            IntakeError::Infrastructure(_) => error,
        }
    }
}
