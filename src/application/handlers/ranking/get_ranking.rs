//! GetRankingHandler - Query handler for the current ranking.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ranking::Ranking;
use crate::ports::RankingStore;

/// Query for the most recently stored ranking.
#[derive(Debug, Clone, Default)]
pub struct GetRankingQuery;

/// Handler for reading the current ranking.
pub struct GetRankingHandler {
    ranking_store: Arc<dyn RankingStore>,
}

impl GetRankingHandler {
    pub fn new(ranking_store: Arc<dyn RankingStore>) -> Self {
        Self { ranking_store }
    }

    /// Returns the current ranking, or `RankingNotFound` before the first run.
    pub async fn handle(&self, _query: GetRankingQuery) -> Result<Ranking, DomainError> {
        self.ranking_store.current().await?.ok_or_else(|| {
            DomainError::new(ErrorCode::RankingNotFound, "No ranking has been computed yet")
        })
    }
}
