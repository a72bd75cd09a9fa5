//! Candidate record built up as stages complete.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use super::stage::StageKind;
use super::validators::parse_tech_stack;

/// Fields captured from a candidate. A field is `None` until its stage
/// accepts an answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
}

impl CandidateRecord {
    /// Stores an accepted answer under the field owned by `kind`.
    ///
    /// Text answers are trimmed. The tech stack is parsed into distinct
    /// technologies.
    pub(crate) fn capture(&mut self, kind: StageKind, input: &str) {
        let value = input.trim().to_string();
        match kind {
            StageKind::FullName => self.name = Some(value),
            StageKind::Email => self.email = Some(value),
            StageKind::Phone => self.phone = Some(value),
            StageKind::Experience => self.experience = Some(value),
            StageKind::Position => self.position = Some(value),
            StageKind::Location => self.location = Some(value),
            StageKind::TechStack => self.tech_stack = Some(parse_tech_stack(input)),
        }
    }

    pub fn technologies(&self) -> &[String] {
        self.tech_stack.as_deref().unwrap_or(&[])
    }

    /// Number of captured fields.
    pub fn captured_count(&self) -> usize {
        self.fields().len()
    }

    /// Captured fields keyed by field name, tech stack comma-joined.
    fn fields(&self) -> BTreeMap<&'static str, String> {
        let mut fields = BTreeMap::new();
        let text_fields = [
            (StageKind::FullName, &self.name),
            (StageKind::Email, &self.email),
            (StageKind::Phone, &self.phone),
            (StageKind::Experience, &self.experience),
            (StageKind::Position, &self.position),
            (StageKind::Location, &self.location),
        ];
        for (kind, value) in text_fields {
            if let Some(value) = value {
                fields.insert(kind.field(), value.clone());
            }
        }
        if let Some(techs) = &self.tech_stack {
            fields.insert(StageKind::TechStack.field(), techs.join(", "));
        }
        fields
    }

    /// Captured fields with every value replaced by its SHA-256 hex digest.
    /// This is the only form in which candidate values reach the logs.
    pub fn anonymized(&self) -> BTreeMap<&'static str, String> {
        self.fields()
            .into_iter()
            .map(|(field, value)| (field, format!("{:x}", Sha256::digest(value.as_bytes()))))
            .collect()
    }
}
