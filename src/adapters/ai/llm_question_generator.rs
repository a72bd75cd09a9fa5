//! LLM-backed question generator.
//!
//! Implements the QuestionGenerator port on top of any AIProvider by
//! rendering the interview-question prompt and returning the model's text.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::domain::intake::prompts::question_prompt;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, GenerationError, MessageRole, QuestionGenerator,
    RequestMetadata,
};

const SYSTEM_PROMPT: &str = "You are a technical interviewer preparing screening questions \
for a job candidate. Reply only with the numbered list of questions.";

/// Question generator that asks a language model.
pub struct LlmQuestionGenerator {
    provider: Arc<dyn AIProvider>,
    temperature: f32,
    max_tokens: u32,
}

impl LlmQuestionGenerator {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            temperature: 0.7,
            max_tokens: 800,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn build_request(&self, technology: &str, experience: &str) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(Uuid::new_v4().to_string()))
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, question_prompt(technology, experience))
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }
}

impl From<AIError> for GenerationError {
    fn from(err: AIError) -> Self {
        match err {
            AIError::Timeout { timeout_secs } => {
                GenerationError::Timeout(Duration::from_secs(u64::from(timeout_secs)))
            }
            other => GenerationError::service(other.to_string()),
        }
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(&self, technology: &str, experience: &str) -> Result<String, GenerationError> {
        let request = self.build_request(technology, experience);
        debug!(
            technology,
            trace_id = %request.metadata.trace_id,
            provider = %self.provider.provider_info().name,
            "Requesting interview questions"
        );

        let response = self.provider.complete(request).await?;
        let text = response.content.trim();
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}
