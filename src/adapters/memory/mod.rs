//! In-memory adapters for alternatives and rankings.

mod alternative_repository;
mod ranking_store;

pub use alternative_repository::InMemoryAlternativeRepository;
pub use ranking_store::InMemoryRankingStore;
