//! Ranking handlers.

mod compute_ranking;
mod get_ranking;

pub use compute_ranking::{
    ComputeRankingCommand, ComputeRankingError, ComputeRankingHandler, ComputeRankingResult,
};
pub use get_ranking::{GetRankingHandler, GetRankingQuery};
