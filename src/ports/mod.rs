//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the ranking domain and its collaborators. Adapters implement these ports.
//!
//! - `AlternativeReader` - stored alternative records (read-only)
//! - `CriteriaReader` - ordered criterion metadata with directions
//! - `RankingStore` - atomic replace and read of the current ranking
//! - `EventPublisher` - domain event publishing

mod alternative_reader;
mod criteria_reader;
mod event_publisher;
mod ranking_store;

pub use alternative_reader::AlternativeReader;
pub use criteria_reader::CriteriaReader;
pub use event_publisher::EventPublisher;
pub use ranking_store::RankingStore;
