//! Ranking - the output of one ranking run, swapped into the store as a unit.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RankingRunId, Timestamp};

use super::RankedEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    run_id: RankingRunId,
    /// Criterion keys in the order they were applied.
    criterion_keys: Vec<String>,
    entries: Vec<RankedEntry>,
    computed_at: Timestamp,
}

impl Ranking {
    pub fn new(entries: Vec<RankedEntry>, criterion_keys: Vec<String>) -> Self {
        Self {
            run_id: RankingRunId::new(),
            criterion_keys,
            entries,
            computed_at: Timestamp::now(),
        }
    }

    pub fn run_id(&self) -> &RankingRunId {
        &self.run_id
    }

    pub fn criterion_keys(&self) -> &[String] {
        &self.criterion_keys
    }

    /// Entries ordered by rank.
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn computed_at(&self) -> Timestamp {
        self.computed_at
    }

    /// The rank-1 entry, if any.
    pub fn top(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
