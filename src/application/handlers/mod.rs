//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{
    ComputeRankingCommand, ComputeRankingError, ComputeRankingHandler, ComputeRankingResult,
    GetRankingHandler, GetRankingQuery,
};
