//! Alternative - an entity being ranked.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AlternativeId;

/// An alternative with its criterion values in the agreed criterion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub label: String,
    pub criterion_values: Vec<f64>,
    /// Free-text note carried through to the ranked output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Alternative {
    pub fn new(id: AlternativeId, label: impl Into<String>, criterion_values: Vec<f64>) -> Self {
        Self {
            id,
            label: label.into(),
            criterion_values,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn criterion_count(&self) -> usize {
        self.criterion_values.len()
    }
}
