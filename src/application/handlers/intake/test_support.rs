//! Shared fixtures for intake handler tests.

use std::sync::Arc;

use crate::adapters::ai::{LlmQuestionGenerator, MockAIProvider};
use crate::adapters::storage::InMemorySessionStore;
use crate::domain::intake::IntakeEngine;

pub(crate) fn engine_with(provider: MockAIProvider) -> Arc<IntakeEngine> {
    let generator = LlmQuestionGenerator::new(Arc::new(provider));
    Arc::new(IntakeEngine::canonical(Arc::new(generator)))
}

pub(crate) fn engine() -> Arc<IntakeEngine> {
    engine_with(MockAIProvider::new())
}

pub(crate) fn store() -> Arc<InMemorySessionStore> {
    Arc::new(InMemorySessionStore::new())
}
