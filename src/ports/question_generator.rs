//! Question Generator Port - produces interview questions for a technology.
//!
//! The intake engine calls this once per declared technology when the tech
//! stack stage completes. Implementations own any retry policy; the engine
//! only bounds each call with a timeout.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Port for generating technical interview questions.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Generates a block of interview questions about `technology` suited to
    /// a candidate with `experience` years of experience.
    async fn generate(&self, technology: &str, experience: &str) -> Result<String, GenerationError>;
}

/// Reasons a generation call produced no usable questions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Generation service failed: {0}")]
    Service(String),

    #[error("Generation timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Generation returned an empty response")]
    EmptyResponse,
}

impl GenerationError {
    pub fn service(message: impl Into<String>) -> Self {
        GenerationError::Service(message.into())
    }
}
