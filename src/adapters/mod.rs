//! Adapters - Implementations of port interfaces.
//!
//! - `criteria` - Criterion metadata from configuration
//! - `events` - Event publishers (in-memory capture, tracing log)
//! - `json` - Alternative records from JSON files
//! - `memory` - In-memory alternative repository and ranking store

pub mod criteria;
pub mod events;
pub mod json;
pub mod memory;

pub use criteria::ConfiguredCriteriaReader;
pub use events::{InMemoryEventBus, TracingEventPublisher};
pub use json::JsonFileAlternativeReader;
pub use memory::{InMemoryAlternativeRepository, InMemoryRankingStore};
