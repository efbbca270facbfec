//! Alternative reader port.
//!
//! Gives the ranking use case read-only access to stored alternative
//! records. Records arrive already parsed into numeric criterion vectors;
//! form parsing and CRUD live with the storage collaborator.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::ranking::Alternative;

/// Port for listing the alternatives to rank.
#[async_trait]
pub trait AlternativeReader: Send + Sync {
    /// Returns every stored alternative in a stable order.
    ///
    /// The order is significant: it decides tie-breaks in the ranking.
    ///
    /// # Errors
    ///
    /// - `StorageError` on read failure
    async fn list_all(&self) -> Result<Vec<Alternative>, DomainError>;
}
