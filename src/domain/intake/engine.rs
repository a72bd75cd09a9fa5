//! Intake conversation engine.
//!
//! Owns the ordered stage list and drives one session forward a turn at a
//! time. The engine holds no per-session state of its own, so one instance
//! can serve any number of sessions concurrently as long as each session is
//! touched by one turn at a time.
//!
//! # Turn handling
//!
//! 1. Ended sessions get the fixed "already ended" reply and are not touched.
//! 2. Exit intent terminates the session from any stage.
//! 3. Input failing the active stage's validator is re-prompted.
//! 4. Accepted input is captured; the next stage's prompt is sent.
//! 5. On the tech stack stage, questions are generated per technology, in
//!    declaration order, followed by the closing message.
//!
//! The final turn is applied only after generation returns. A submission
//! dropped mid-generation leaves the session exactly as it was, so the
//! candidate can resend the tech stack.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{GenerationError, QuestionGenerator};

use super::exit_intent::is_exit_intent;
use super::generation::GeneratedQuestionSet;
use super::prompts;
use super::session::IntakeSession;
use super::stage::{Stage, StageKind, Validator};
use super::transcript::Turn;
use super::validators::parse_tech_stack;

/// Stage lists the engine refuses to run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageConfigError {
    #[error("Stage list is empty")]
    Empty,

    #[error("Last stage must collect the tech stack, found {0}")]
    LastStageNotTechStack(StageKind),

    #[error("Tech stack stage must be last, found at position {0}")]
    TechStackNotLast(usize),

    #[error("Stage {0} appears more than once")]
    DuplicateStage(StageKind),

    #[error("Tech stack stage must use the tech stack validator")]
    TechStackUnvalidated,
}

impl From<StageConfigError> for DomainError {
    fn from(err: StageConfigError) -> Self {
        DomainError::new(ErrorCode::MalformedStageConfiguration, err.to_string())
    }
}

/// How the terminal fan-out calls the question generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    /// Upper bound for one generation call. Exceeding it counts as a failure.
    pub timeout: Duration,
    /// Issue all calls at once instead of one after another.
    pub concurrent: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(45),
            concurrent: true,
        }
    }
}

/// What a submitted turn did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Input accepted; the next stage is active.
    Advanced,
    /// Input failed the active stage's validator; nothing changed.
    Rejected,
    /// Tech stack accepted; questions generated and the session closed.
    Completed,
    /// Candidate asked to leave.
    Terminated,
    /// Session had already ended; nothing changed.
    AlreadyEnded,
}

/// Assistant turns produced by one submission, in display order.
#[derive(Debug, Clone)]
pub struct TurnResult {
    pub outcome: TurnOutcome,
    pub replies: Vec<Turn>,
}

/// Drives intake sessions through a fixed, ordered list of stages.
pub struct IntakeEngine {
    stages: Vec<Stage>,
    generator: Arc<dyn QuestionGenerator>,
    settings: GenerationSettings,
}

impl IntakeEngine {
    /// Creates an engine over `stages`, rejecting lists that are empty,
    /// repeat a stage, or do not end with a validated tech stack stage.
    pub fn new(
        stages: Vec<Stage>,
        generator: Arc<dyn QuestionGenerator>,
    ) -> Result<Self, StageConfigError> {
        validate_stages(&stages)?;
        Ok(Self {
            stages,
            generator,
            settings: GenerationSettings::default(),
        })
    }

    /// Creates an engine over the seven-stage standard flow.
    pub fn canonical(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self {
            stages: Stage::canonical_flow(),
            generator,
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_generation_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Active stage of the session, or `None` once it has ended.
    pub fn current_stage(&self, session: &IntakeSession) -> Option<&Stage> {
        if !session.is_active() {
            return None;
        }
        self.stages.get(session.current_stage_index())
    }

    /// Starts a session at the first stage with its prompt as the opening turn.
    pub fn create_session(&self) -> IntakeSession {
        let mut session = IntakeSession::new(SessionId::new());
        if let Some(first) = self.stages.first() {
            session.record_turn(Turn::assistant(first.prompt()));
        }
        info!(session_id = %session.id(), "Intake session created");
        session
    }

    /// Applies one candidate turn to the session.
    pub async fn submit(&self, session: &mut IntakeSession, text: &str) -> TurnResult {
        if !session.is_active() {
            debug!(
                session_id = %session.id(),
                status = %session.status(),
                "Turn submitted to ended session"
            );
            return TurnResult {
                outcome: TurnOutcome::AlreadyEnded,
                replies: vec![Turn::assistant(prompts::SESSION_ENDED_MESSAGE)],
            };
        }

        if is_exit_intent(text) {
            session.record_turn(Turn::user(text));
            if let Err(err) = session.terminate() {
                warn!(session_id = %session.id(), error = %err, "Could not terminate session");
            }
            info!(
                session_id = %session.id(),
                stage_index = session.current_stage_index(),
                captured_fields = session.record().captured_count(),
                "Intake session terminated by candidate"
            );
            return reply(session, TurnOutcome::Terminated, vec![prompts::FAREWELL_MESSAGE.to_string()]);
        }

        let index = session.current_stage_index();
        let Some(stage) = self.stages.get(index) else {
            session.record_turn(Turn::user(text));
            warn!(session_id = %session.id(), stage_index = index, "Session is past the last stage");
            return reply(
                session,
                TurnOutcome::AlreadyEnded,
                vec![prompts::SESSION_ENDED_MESSAGE.to_string()],
            );
        };

        if !stage.accepts(text) {
            session.record_turn(Turn::user(text));
            debug!(session_id = %session.id(), stage = stage.name(), "Answer rejected");
            return reply(
                session,
                TurnOutcome::Rejected,
                vec![stage.rejection_message().to_string()],
            );
        }

        let Some(next) = self.stages.get(index + 1) else {
            return self.finish(session, stage, text).await;
        };

        session.record_turn(Turn::user(text));
        session.capture(stage.kind(), text);
        session.advance();
        debug!(
            session_id = %session.id(),
            from = stage.name(),
            to = next.name(),
            "Stage advanced"
        );
        reply(session, TurnOutcome::Advanced, vec![next.prompt().to_string()])
    }

    /// Runs the fan-out for the tech stack answer, then applies the turn.
    /// Nothing is written to the session until every generation call has
    /// returned.
    async fn finish(&self, session: &mut IntakeSession, stage: &Stage, text: &str) -> TurnResult {
        let technologies = parse_tech_stack(text);
        let experience = session
            .record()
            .experience
            .clone()
            .unwrap_or_else(|| prompts::DEFAULT_EXPERIENCE.to_string());

        let sets = self.generate_question_sets(&technologies, &experience).await;
        let failures = sets.iter().filter(|s| !s.is_generated()).count();

        let mut messages: Vec<String> = sets.iter().map(GeneratedQuestionSet::display_text).collect();
        messages.push(prompts::CLOSING_MESSAGE.to_string());

        session.record_turn(Turn::user(text));
        session.capture(stage.kind(), text);
        session.attach_question_sets(sets);
        if let Err(err) = session.complete() {
            warn!(session_id = %session.id(), error = %err, "Could not complete session");
        }
        info!(
            session_id = %session.id(),
            technologies = technologies.len(),
            failures,
            candidate = ?session.record().anonymized(),
            "Intake session completed"
        );

        reply(session, TurnOutcome::Completed, messages)
    }

    /// One question set per technology, in the order given.
    async fn generate_question_sets(
        &self,
        technologies: &[String],
        experience: &str,
    ) -> Vec<GeneratedQuestionSet> {
        if self.settings.concurrent {
            join_all(
                technologies
                    .iter()
                    .map(|tech| self.generate_question_set(tech, experience)),
            )
            .await
        } else {
            let mut sets = Vec::with_capacity(technologies.len());
            for tech in technologies {
                sets.push(self.generate_question_set(tech, experience).await);
            }
            sets
        }
    }

    async fn generate_question_set(&self, technology: &str, experience: &str) -> GeneratedQuestionSet {
        let call = self.generator.generate(technology, experience);
        let error = match tokio::time::timeout(self.settings.timeout, call).await {
            Ok(Ok(text)) if !text.trim().is_empty() => {
                return GeneratedQuestionSet::generated(technology, text.trim());
            }
            Ok(Ok(_)) => GenerationError::EmptyResponse,
            Ok(Err(err)) => err,
            Err(_) => GenerationError::Timeout(self.settings.timeout),
        };

        warn!(technology, error = %error, "Question generation failed");
        GeneratedQuestionSet::failed(technology, error.to_string())
    }
}

fn reply(session: &mut IntakeSession, outcome: TurnOutcome, messages: Vec<String>) -> TurnResult {
    let replies: Vec<Turn> = messages.into_iter().map(Turn::assistant).collect();
    for turn in &replies {
        session.record_turn(turn.clone());
    }
    TurnResult { outcome, replies }
}

fn validate_stages(stages: &[Stage]) -> Result<(), StageConfigError> {
    let last = stages.last().ok_or(StageConfigError::Empty)?;
    if last.kind() != StageKind::TechStack {
        return Err(StageConfigError::LastStageNotTechStack(last.kind()));
    }
    if last.validator() != Some(Validator::TechStack) {
        return Err(StageConfigError::TechStackUnvalidated);
    }

    for (i, stage) in stages.iter().enumerate() {
        if stage.kind() == StageKind::TechStack && i + 1 != stages.len() {
            return Err(StageConfigError::TechStackNotLast(i));
        }
        if stages[..i].iter().any(|s| s.kind() == stage.kind()) {
            return Err(StageConfigError::DuplicateStage(stage.kind()));
        }
    }
    Ok(())
}
