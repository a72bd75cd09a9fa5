//! Intake session aggregate.

use serde::Serialize;
use std::time::Duration;

use crate::domain::foundation::{SessionId, StateMachine, Timestamp, ValidationError};

use super::generation::GeneratedQuestionSet;
use super::record::CandidateRecord;
use super::stage::StageKind;
use super::status::SessionStatus;
use super::transcript::{Transcript, Turn};

/// How long stored sessions are kept after their last change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRetention {
    /// Sessions still in progress are dropped after this much inactivity.
    pub idle: Duration,
    /// Completed or terminated sessions are dropped after this long.
    pub ended: Duration,
}

impl Default for SessionRetention {
    fn default() -> Self {
        Self {
            idle: Duration::from_secs(30 * 60),
            ended: Duration::from_secs(5 * 60),
        }
    }
}

/// One candidate's run through the intake flow.
///
/// Fields are read-only outside the domain; only the engine drives state
/// changes.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeSession {
    id: SessionId,
    current_stage_index: usize,
    record: CandidateRecord,
    transcript: Transcript,
    status: SessionStatus,
    question_sets: Vec<GeneratedQuestionSet>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl IntakeSession {
    pub(crate) fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            current_stage_index: 0,
            record: CandidateRecord::default(),
            transcript: Transcript::new(),
            status: SessionStatus::InProgress,
            question_sets: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn current_stage_index(&self) -> usize {
        self.current_stage_index
    }

    pub fn record(&self) -> &CandidateRecord {
        &self.record
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn question_sets(&self) -> &[GeneratedQuestionSet] {
        &self.question_sets
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn is_active(&self) -> bool {
        self.status.accepts_input()
    }

    /// Returns true once the session has outlived `retention` at `now`.
    pub fn is_expired(&self, now: Timestamp, retention: &SessionRetention) -> bool {
        let elapsed = now
            .as_datetime()
            .signed_duration_since(*self.updated_at.as_datetime())
            .to_std()
            .unwrap_or(Duration::ZERO);
        let limit = if self.is_active() {
            retention.idle
        } else {
            retention.ended
        };
        elapsed >= limit
    }

    // === Engine-only mutators ===

    pub(crate) fn record_turn(&mut self, turn: Turn) {
        self.transcript.push(turn);
        self.touch();
    }

    pub(crate) fn capture(&mut self, kind: StageKind, input: &str) {
        self.record.capture(kind, input);
        self.touch();
    }

    pub(crate) fn advance(&mut self) {
        self.current_stage_index += 1;
        self.touch();
    }

    pub(crate) fn attach_question_sets(&mut self, sets: Vec<GeneratedQuestionSet>) {
        self.question_sets = sets;
        self.touch();
    }

    pub(crate) fn complete(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(SessionStatus::Completed)?;
        self.touch();
        Ok(())
    }

    pub(crate) fn terminate(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(SessionStatus::TerminatedByUser)?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
