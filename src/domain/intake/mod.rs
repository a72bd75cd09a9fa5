//! Candidate intake conversation.
//!
//! A fixed, ordered sequence of collection stages walks a candidate through
//! name, contact details, experience, position, location and tech stack,
//! then generates interview questions for each declared technology.
//!
//! # Module Organization
//!
//! - `stage` - Stage identities, prompts and acceptance rules
//! - `validators` - Predicates over raw answers
//! - `exit_intent` - Recognition of a wish to leave
//! - `record` - Captured candidate fields
//! - `transcript` - Append-only conversation turns
//! - `session` - Per-candidate session aggregate
//! - `engine` - Turn handling and terminal question generation
//! - `errors` - Errors surfaced by intake handlers

mod engine;
mod errors;
mod exit_intent;
mod generation;
pub mod prompts;
mod record;
mod session;
mod stage;
mod status;
mod transcript;
pub mod validators;

pub use engine::{GenerationSettings, IntakeEngine, StageConfigError, TurnOutcome, TurnResult};
pub use errors::IntakeError;
pub use exit_intent::{is_exit_intent, EXIT_KEYWORDS};
pub use generation::{GeneratedQuestionSet, GenerationOutcome};
pub use record::CandidateRecord;
pub use session::{IntakeSession, SessionRetention};
pub use stage::{Stage, StageKind, Validator};
pub use status::SessionStatus;
pub use transcript::{Transcript, Turn, TurnRole};
