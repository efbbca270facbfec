//! Ranking domain events.
//!
//! Published after a ranking run has been stored, so listeners (dashboards,
//! audit logs) can refresh without polling the ranking store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, EventId, RankingRunId, Timestamp};

use super::Ranking;

/// Published when a ranking run completes and replaces the stored ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingComputed {
    /// Unique event identifier for deduplication.
    pub event_id: EventId,
    /// The run that produced the ranking.
    pub run_id: RankingRunId,
    pub alternative_count: usize,
    pub criterion_count: usize,
    /// Rank-1 alternative.
    pub top_alternative_id: Option<AlternativeId>,
    pub top_net_flow: Option<f64>,
    pub computed_at: Timestamp,
}

impl RankingComputed {
    pub fn from_ranking(ranking: &Ranking) -> Self {
        Self {
            event_id: EventId::new(),
            run_id: *ranking.run_id(),
            alternative_count: ranking.len(),
            criterion_count: ranking.criterion_keys().len(),
            top_alternative_id: ranking.top().map(|e| e.alternative_id.clone()),
            top_net_flow: ranking.top().map(|e| e.net_flow),
            computed_at: ranking.computed_at(),
        }
    }
}

crate::domain_event!(
    RankingComputed,
    event_type = "ranking.computed.v1",
    schema_version = 1,
    aggregate_id = run_id,
    aggregate_type = "Ranking",
    occurred_at = computed_at,
    event_id = event_id
);
