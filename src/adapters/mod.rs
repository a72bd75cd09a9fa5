//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Language-model providers and the question generator built on them
//! - `http` - axum REST surface
//! - `storage` - In-process session store

pub mod ai;
pub mod http;
pub mod storage;

pub use ai::{LlmQuestionGenerator, MockAIProvider, OpenAIConfig, OpenAIProvider};
pub use http::{build_router, IntakeHandlers};
pub use storage::{InMemorySessionStore, SessionSweeper};
