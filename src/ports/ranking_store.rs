//! Ranking store port.
//!
//! Holds the most recent ranking for display.
//!
//! # Design
//!
//! - **Atomic replace**: a new ranking is swapped in whole; readers see
//!   either the previous ranking or the new one, never an empty or
//!   half-written table
//! - **Single current ranking**: older runs are discarded on replace

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::ranking::Ranking;

/// Port for publishing and reading the current ranking.
#[async_trait]
pub trait RankingStore: Send + Sync {
    /// Replaces the stored ranking with `ranking` as one transaction.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure; the previous ranking
    ///   must remain visible in that case
    async fn replace(&self, ranking: Ranking) -> Result<(), DomainError>;

    /// Returns the current ranking, or `None` if no run has been stored.
    async fn current(&self) -> Result<Option<Ranking>, DomainError>;
}
