//! Criteria reader backed by application configuration.

use async_trait::async_trait;

use crate::config::RankingConfig;
use crate::domain::foundation::DomainError;
use crate::domain::ranking::Criterion;
use crate::ports::CriteriaReader;

/// Serves a fixed, ordered criterion list loaded at startup.
#[derive(Debug, Clone)]
pub struct ConfiguredCriteriaReader {
    criteria: Vec<Criterion>,
}

impl ConfiguredCriteriaReader {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    pub fn from_config(config: &RankingConfig) -> Self {
        Self::new(config.criteria.clone())
    }
}

impl Default for ConfiguredCriteriaReader {
    fn default() -> Self {
        Self::new(Criterion::default_set())
    }
}

#[async_trait]
impl CriteriaReader for ConfiguredCriteriaReader {
    async fn list_criteria(&self) -> Result<Vec<Criterion>, DomainError> {
        Ok(self.criteria.clone())
    }
}
