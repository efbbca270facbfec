//! In-Memory Alternative Repository
//!
//! Holds alternative records in insertion order. Useful for tests and for
//! the CLI, which loads records once from a file.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AlternativeId, DomainError};
use crate::domain::ranking::Alternative;
use crate::ports::AlternativeReader;

#[derive(Debug, Clone, Default)]
pub struct InMemoryAlternativeRepository {
    alternatives: Arc<RwLock<Vec<Alternative>>>,
}

impl InMemoryAlternativeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alternatives(alternatives: Vec<Alternative>) -> Self {
        Self {
            alternatives: Arc::new(RwLock::new(alternatives)),
        }
    }

    /// Inserts an alternative, replacing any record with the same id in place.
    pub async fn upsert(&self, alternative: Alternative) {
        let mut alternatives = self.alternatives.write().await;
        match alternatives.iter().position(|a| a.id == alternative.id) {
            Some(pos) => alternatives[pos] = alternative,
            None => alternatives.push(alternative),
        }
    }

    /// Removes an alternative, returning whether it existed.
    pub async fn remove(&self, id: &AlternativeId) -> bool {
        let mut alternatives = self.alternatives.write().await;
        let before = alternatives.len();
        alternatives.retain(|a| &a.id != id);
        alternatives.len() != before
    }

    pub async fn len(&self) -> usize {
        self.alternatives.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.alternatives.read().await.is_empty()
    }
}

#[async_trait]
impl AlternativeReader for InMemoryAlternativeRepository {
    async fn list_all(&self) -> Result<Vec<Alternative>, DomainError> {
        Ok(self.alternatives.read().await.clone())
    }
}
