//! Outcome of generating interview questions for one technology.

use serde::{Deserialize, Serialize};

use super::prompts;

/// Result of one generation call, kept explicit so the apology policy is
/// visible wherever the outcome is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Generated { text: String },
    Failed { reason: String },
}

/// Questions (or the failure in their place) for one declared technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestionSet {
    pub technology: String,
    pub outcome: GenerationOutcome,
}

impl GeneratedQuestionSet {
    pub fn generated(technology: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            technology: technology.into(),
            outcome: GenerationOutcome::Generated { text: text.into() },
        }
    }

    pub fn failed(technology: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            technology: technology.into(),
            outcome: GenerationOutcome::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.outcome, GenerationOutcome::Generated { .. })
    }

    /// Text shown to the candidate: the questions, or the apology.
    pub fn display_text(&self) -> String {
        match &self.outcome {
            GenerationOutcome::Generated { text } => text.clone(),
            GenerationOutcome::Failed { .. } => prompts::generation_apology(&self.technology),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_set_displays_its_text() {
        let set = GeneratedQuestionSet::generated("Go", "1. What is a goroutine?");
        assert!(set.is_generated());
        assert_eq!(set.display_text(), "1. What is a goroutine?");
    }

    #[test]
    fn failed_set_displays_apology_without_reason() {
        let set = GeneratedQuestionSet::failed("Go", "quota exceeded");
        assert!(!set.is_generated());
        let text = set.display_text();
        assert!(text.contains("Go"));
        assert!(!text.contains("quota"));
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let set = GeneratedQuestionSet::failed("Go", "timeout");
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["outcome"]["status"], "failed");
        assert_eq!(json["outcome"]["reason"], "timeout");
    }
}
