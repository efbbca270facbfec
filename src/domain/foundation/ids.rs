//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of an alternative, as assigned by the storage collaborator.
///
/// Stored as a string so numeric database keys and external slugs both fit.
/// Deserialization goes through [`AlternativeId::new`], so blank ids in
/// input files are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct AlternativeId(String);

impl AlternativeId {
    /// Creates an AlternativeId, rejecting blank values.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("alternative_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlternativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AlternativeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl TryFrom<String> for AlternativeId {
    type Error = ValidationError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

/// Unique identifier for one ranking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingRunId(Uuid);

impl RankingRunId {
    /// Creates a new random RankingRunId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RankingRunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RankingRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternative_id_rejects_blank() {
        assert!(AlternativeId::new("").is_err());
        assert!(AlternativeId::new("   ").is_err());
    }

    #[test]
    fn alternative_id_from_numeric_key() {
        let id = AlternativeId::from(42);
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn alternative_id_serializes_transparently() {
        let id = AlternativeId::new("acc-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"acc-1\"");
    }

    #[test]
    fn alternative_id_deserialization_rejects_blank() {
        assert!(serde_json::from_str::<AlternativeId>("\"  \"").is_err());
        let id: AlternativeId = serde_json::from_str("\"acc-1\"").unwrap();
        assert_eq!(id.as_str(), "acc-1");
    }

    #[test]
    fn ranking_run_id_serializes_as_uuid_string() {
        let id = RankingRunId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: RankingRunId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn ranking_run_ids_are_unique() {
        assert_ne!(RankingRunId::new(), RankingRunId::new());
    }
}
