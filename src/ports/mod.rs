//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Generation Ports
//!
//! - `QuestionGenerator` - Produces interview questions for one technology
//! - `AIProvider` - Raw chat-completion access used by the LLM generator
//!
//! ## Storage Ports
//!
//! - `SessionStore` - Live intake sessions, each behind its own lock

mod ai_provider;
mod question_generator;
mod session_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use question_generator::{GenerationError, QuestionGenerator};
pub use session_store::{SessionHandle, SessionStore, SessionStoreError};
