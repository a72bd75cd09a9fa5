//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `intake` - Candidate intake conversation: stages, sessions and the engine

pub mod foundation;
pub mod intake;
