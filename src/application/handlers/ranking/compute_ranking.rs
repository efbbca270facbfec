//! ComputeRankingHandler - Command handler for a full ranking run.
//!
//! Reads alternatives and criteria, runs the outranking pipeline, swaps the
//! result into the ranking store, and announces it with a `RankingComputed`
//! event. Any failure before the swap leaves the stored ranking untouched;
//! once the swap succeeds the run succeeds, and a publishing failure is only
//! logged and reported through `ComputeRankingResult::published`.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::foundation::{DomainError, ErrorCode, SerializableDomainEvent};
use crate::domain::ranking::{PrometheeRanker, Ranking, RankingComputed, RankingError};
use crate::ports::{AlternativeReader, CriteriaReader, EventPublisher, RankingStore};

/// Command to recompute the ranking from stored data.
#[derive(Debug, Clone, Default)]
pub struct ComputeRankingCommand {
    /// Propagated to the published event for tracing.
    pub correlation_id: Option<String>,
}

/// Result of a successful ranking run.
#[derive(Debug, Clone)]
pub struct ComputeRankingResult {
    /// The ranking now held by the store.
    pub ranking: Ranking,
    /// The event describing the run.
    pub event: RankingComputed,
    /// Whether the event reached the publisher. A `false` here does not
    /// undo the run: the ranking is already in the store.
    pub published: bool,
}

/// Error type for a ranking run.
#[derive(Debug, Clone, Error)]
pub enum ComputeRankingError {
    /// Stored data has the wrong shape for ranking.
    #[error(transparent)]
    Ranking(#[from] RankingError),
    /// Reading inputs or storing the ranking failed.
    #[error(transparent)]
    Infrastructure(DomainError),
}

impl ComputeRankingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ComputeRankingError::Ranking(err) => err.code(),
            ComputeRankingError::Infrastructure(err) => err.code,
        }
    }
}

impl From<DomainError> for ComputeRankingError {
    fn from(err: DomainError) -> Self {
        ComputeRankingError::Infrastructure(err)
    }
}

/// Handler for ranking runs.
pub struct ComputeRankingHandler {
    alternative_reader: Arc<dyn AlternativeReader>,
    criteria_reader: Arc<dyn CriteriaReader>,
    ranking_store: Arc<dyn RankingStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ComputeRankingHandler {
    pub fn new(
        alternative_reader: Arc<dyn AlternativeReader>,
        criteria_reader: Arc<dyn CriteriaReader>,
        ranking_store: Arc<dyn RankingStore>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            alternative_reader,
            criteria_reader,
            ranking_store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ComputeRankingCommand,
    ) -> Result<ComputeRankingResult, ComputeRankingError> {
        // 1. Load inputs
        let alternatives = self.alternative_reader.list_all().await?;
        let criteria = self.criteria_reader.list_criteria().await?;

        // 2. Rank (pure; validates shape before any computation)
        let entries = PrometheeRanker::rank_with_criteria(&alternatives, &criteria)
            .map_err(|err| {
                warn!(error = %err, code = %err.code(), "Ranking run rejected");
                err
            })?;

        let criterion_keys = criteria.iter().map(|c| c.key.clone()).collect();
        let ranking = Ranking::new(entries, criterion_keys);

        // 3. Build the event before committing, so nothing fallible is left
        //    after the swap except delivery
        let event = RankingComputed::from_ranking(&ranking);
        let mut envelope = event.to_envelope().map_err(|err| {
            DomainError::new(ErrorCode::InternalError, "Failed to serialize ranking event")
                .with_detail("cause", err.to_string())
        })?;
        if let Some(correlation_id) = cmd.correlation_id {
            envelope = envelope.with_correlation_id(correlation_id);
        }

        // 4. Swap into the store; from here on the run is committed
        self.ranking_store.replace(ranking.clone()).await?;

        info!(
            run_id = %ranking.run_id(),
            alternatives = ranking.len(),
            criteria = criteria.len(),
            "Ranking stored"
        );

        // 5. Announce (best effort)
        let published = match self.event_publisher.publish(envelope).await {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    run_id = %ranking.run_id(),
                    code = %err.code,
                    error = %err,
                    "Ranking stored but RankingComputed event was not published"
                );
                false
            }
        };

        Ok(ComputeRankingResult {
            ranking,
            event,
            published,
        })
    }
}
