//! Intake session lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of an intake session.
///
/// - `InProgress`: collecting answers stage by stage
/// - `Completed`: tech stack captured and questions generated
/// - `TerminatedByUser`: candidate asked to leave before finishing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    InProgress,
    Completed,
    TerminatedByUser,
}

impl SessionStatus {
    /// Returns true if the session still accepts answers.
    pub fn accepts_input(&self) -> bool {
        matches!(self, SessionStatus::InProgress)
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (InProgress, Completed) | (InProgress, TerminatedByUser)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionStatus::*;
        match self {
            InProgress => vec![Completed, TerminatedByUser],
            Completed | TerminatedByUser => vec![],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
            SessionStatus::TerminatedByUser => "terminated_by_user",
        };
        write!(f, "{}", s)
    }
}
