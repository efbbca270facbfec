//! JSON File Alternative Reader
//!
//! Reads alternative records from a JSON file, either a bare array or an
//! object with an `alternatives` array:
//!
//! ```json
//! [{ "id": "1", "label": "@acme", "criterion_values": [1200, 0.4], "note": "food" }]
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::ranking::Alternative;
use crate::ports::AlternativeReader;

#[derive(Deserialize)]
#[serde(untagged)]
enum AlternativesDocument {
    List(Vec<Alternative>),
    Wrapped { alternatives: Vec<Alternative> },
}

impl AlternativesDocument {
    fn into_alternatives(self) -> Vec<Alternative> {
        match self {
            AlternativesDocument::List(alternatives) => alternatives,
            AlternativesDocument::Wrapped { alternatives } => alternatives,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileAlternativeReader {
    path: PathBuf,
}

impl JsonFileAlternativeReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AlternativeReader for JsonFileAlternativeReader {
    async fn list_all(&self) -> Result<Vec<Alternative>, DomainError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::storage(format!("Failed to read {}: {}", self.path.display(), e))
                .with_detail("path", self.path.display().to_string())
        })?;

        let document: AlternativesDocument = serde_json::from_str(&contents).map_err(|e| {
            DomainError::storage(format!("Invalid alternatives file {}: {}", self.path.display(), e))
                .with_detail("path", self.path.display().to_string())
        })?;

        let alternatives = document.into_alternatives();
        debug!(path = %self.path.display(), count = alternatives.len(), "Loaded alternatives");
        Ok(alternatives)
    }
}
