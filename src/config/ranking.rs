//! Ranking configuration

use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::ranking::Criterion;

/// Ranking configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Ordered criteria; position `k` matches value `k` of every alternative
    #[serde(default = "Criterion::default_set")]
    pub criteria: Vec<Criterion>,

    /// JSON file with alternative records
    pub alternatives_path: Option<PathBuf>,
}

impl RankingConfig {
    /// Validate ranking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.criteria.len() < 2 {
            return Err(ValidationError::TooFewCriteria(self.criteria.len()));
        }

        let mut seen = HashSet::new();
        for (position, criterion) in self.criteria.iter().enumerate() {
            let key = criterion.key.trim();
            if key.is_empty() {
                return Err(ValidationError::EmptyCriterionKey(position));
            }
            if !seen.insert(key) {
                return Err(ValidationError::DuplicateCriterionKey(key.to_string()));
            }
        }
        Ok(())
    }

    /// Criterion keys in configured order
    pub fn criterion_keys(&self) -> Vec<String> {
        self.criteria.iter().map(|c| c.key.clone()).collect()
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            criteria: Criterion::default_set(),
            alternatives_path: None,
        }
    }
}
