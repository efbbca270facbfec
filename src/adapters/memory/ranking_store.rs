//! In-Memory Ranking Store
//!
//! Keeps the current ranking behind a lock; `replace` swaps the whole
//! ranking under a single write guard, so readers never observe a cleared
//! or partially written ranking.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::ranking::Ranking;
use crate::ports::RankingStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryRankingStore {
    current: Arc<RwLock<Option<Arc<Ranking>>>>,
}

impl InMemoryRankingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the current ranking without cloning its entries.
    pub async fn snapshot(&self) -> Option<Arc<Ranking>> {
        self.current.read().await.clone()
    }
}

#[async_trait]
impl RankingStore for InMemoryRankingStore {
    async fn replace(&self, ranking: Ranking) -> Result<(), DomainError> {
        let next = Arc::new(ranking);
        *self.current.write().await = Some(next);
        Ok(())
    }

    async fn current(&self) -> Result<Option<Ranking>, DomainError> {
        Ok(self.current.read().await.as_deref().cloned())
    }
}
