//! AI Adapters.
//!
//! Implementations of the AIProvider and QuestionGenerator ports.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for development and testing
//! - `OpenAIProvider` - OpenAI chat completion models
//! - `LlmQuestionGenerator` - Interview questions from any AIProvider

mod llm_question_generator;
mod mock_provider;
mod openai_provider;

pub use llm_question_generator::LlmQuestionGenerator;
pub use mock_provider::{MockAIProvider, MockError, MockResponse, DEFAULT_MOCK_CONTENT};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
