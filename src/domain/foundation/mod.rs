//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types, and event
//! infrastructure shared by the ranking domain.

mod errors;
mod events;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent};
pub use ids::{AlternativeId, RankingRunId};
pub use timestamp::Timestamp;
