//! Stages of the intake flow and their acceptance rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::prompts;
use super::validators;

/// Identity of a stage, which also fixes the record field it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    FullName,
    Email,
    Phone,
    Experience,
    Position,
    Location,
    TechStack,
}

impl StageKind {
    /// Unique stage identifier, e.g. `collecting_email`.
    pub fn name(&self) -> &'static str {
        match self {
            StageKind::FullName => "collecting_name",
            StageKind::Email => "collecting_email",
            StageKind::Phone => "collecting_phone",
            StageKind::Experience => "collecting_experience",
            StageKind::Position => "collecting_position",
            StageKind::Location => "collecting_location",
            StageKind::TechStack => "collecting_tech_stack",
        }
    }

    /// Key the captured value is stored under.
    pub fn field(&self) -> &'static str {
        match self {
            StageKind::FullName => "name",
            StageKind::Email => "email",
            StageKind::Phone => "phone",
            StageKind::Experience => "experience",
            StageKind::Position => "position",
            StageKind::Location => "location",
            StageKind::TechStack => "tech_stack",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Acceptance rule applied to the raw text of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Email,
    Phone,
    Experience,
    TechStack,
}

impl Validator {
    pub fn accepts(&self, input: &str) -> bool {
        match self {
            Validator::Email => validators::validate_email(input),
            Validator::Phone => validators::validate_phone(input),
            Validator::Experience => validators::validate_experience(input),
            Validator::TechStack => validators::validate_tech_stack(input),
        }
    }

    /// Re-prompt sent when input fails this rule.
    pub fn rejection_message(&self) -> &'static str {
        match self {
            Validator::Email => prompts::EMAIL_REJECTION,
            Validator::Phone => prompts::PHONE_REJECTION,
            Validator::Experience => prompts::EXPERIENCE_REJECTION,
            Validator::TechStack => prompts::TECH_STACK_REJECTION,
        }
    }
}

/// One step of the intake flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    kind: StageKind,
    prompt: String,
    validator: Option<Validator>,
}

impl Stage {
    pub fn new(kind: StageKind, prompt: impl Into<String>, validator: Option<Validator>) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
            validator,
        }
    }

    pub fn kind(&self) -> StageKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn field(&self) -> &'static str {
        self.kind.field()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn validator(&self) -> Option<Validator> {
        self.validator
    }

    /// Returns true if the stage accepts the input. Stages without a
    /// validator accept anything, including empty text, except the tech
    /// stack stage, which always needs at least one technology.
    pub fn accepts(&self, input: &str) -> bool {
        if self.kind == StageKind::TechStack && !validators::validate_tech_stack(input) {
            return false;
        }
        self.validator.map_or(true, |v| v.accepts(input))
    }

    pub fn rejection_message(&self) -> &'static str {
        match self.validator {
            Some(validator) => validator.rejection_message(),
            None if self.kind == StageKind::TechStack => prompts::TECH_STACK_REJECTION,
            None => prompts::GENERIC_REJECTION,
        }
    }

    /// The seven stages of the standard intake, in order.
    pub fn canonical_flow() -> Vec<Stage> {
        vec![
            Stage::new(StageKind::FullName, prompts::GREETING, None),
            Stage::new(StageKind::Email, prompts::EMAIL_PROMPT, Some(Validator::Email)),
            Stage::new(StageKind::Phone, prompts::PHONE_PROMPT, Some(Validator::Phone)),
            Stage::new(
                StageKind::Experience,
                prompts::EXPERIENCE_PROMPT,
                Some(Validator::Experience),
            ),
            Stage::new(StageKind::Position, prompts::POSITION_PROMPT, None),
            Stage::new(StageKind::Location, prompts::LOCATION_PROMPT, None),
            Stage::new(
                StageKind::TechStack,
                prompts::TECH_STACK_PROMPT,
                Some(Validator::TechStack),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_flow_has_seven_stages_ending_in_tech_stack() {
        let flow = Stage::canonical_flow();
        assert_eq!(flow.len(), 7);
        assert_eq!(flow.last().map(Stage::kind), Some(StageKind::TechStack));
    }

    #[test]
    fn canonical_flow_order_is_fixed() {
        let kinds: Vec<_> = Stage::canonical_flow().iter().map(Stage::kind).collect();
        assert_eq!(
            kinds,
            vec![
                StageKind::FullName,
                StageKind::Email,
                StageKind::Phone,
                StageKind::Experience,
                StageKind::Position,
                StageKind::Location,
                StageKind::TechStack,
            ]
        );
    }

    #[test]
    fn stage_names_are_unique() {
        let flow = Stage::canonical_flow();
        for (i, stage) in flow.iter().enumerate() {
            for other in &flow[i + 1..] {
                assert_ne!(stage.name(), other.name());
            }
        }
    }

    #[test]
    fn unvalidated_stage_accepts_empty_text() {
        let stage = Stage::new(StageKind::Location, "Where?", None);
        assert!(stage.accepts(""));
        assert!(stage.accepts("   "));
    }

    #[test]
    fn validated_stage_rejects_blank_text() {
        for stage in Stage::canonical_flow() {
            if stage.validator().is_some() {
                assert!(!stage.accepts("   "), "{} accepted blank input", stage.name());
            }
        }
    }

    #[test]
    fn tech_stack_stage_needs_a_technology_without_a_validator() {
        let stage = Stage::new(StageKind::TechStack, "Stack?", None);
        assert!(!stage.accepts(" , / "));
        assert!(!stage.accepts(""));
        assert!(stage.accepts("Rust"));
        assert_eq!(stage.rejection_message(), prompts::TECH_STACK_REJECTION);
    }

    #[test]
    fn rejection_message_is_stage_specific() {
        let flow = Stage::canonical_flow();
        assert_eq!(flow[1].rejection_message(), prompts::EMAIL_REJECTION);
        assert_eq!(flow[2].rejection_message(), prompts::PHONE_REJECTION);
        assert_eq!(flow[3].rejection_message(), prompts::EXPERIENCE_REJECTION);
    }

    #[test]
    fn kind_names_and_fields() {
        assert_eq!(StageKind::Email.name(), "collecting_email");
        assert_eq!(StageKind::FullName.field(), "name");
        assert_eq!(StageKind::TechStack.to_string(), "collecting_tech_stack");
    }
}
