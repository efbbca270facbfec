//! Ranking Module - Multi-criteria outranking engine.
//!
//! Ranks alternatives scored on benefit/cost criteria with a pairwise
//! preference (PROMETHEE-style) method.
//!
//! # Pipeline
//!
//! - `DecisionMatrix` - alternatives x criteria values
//! - `PreferenceTensor` - binary indicator per ordered pair and criterion
//! - `PreferenceIndex` - unweighted mean of indicators per ordered pair
//! - `FlowCalculator` - leaving, entering, and net flows
//! - `RankingSorter` - stable ordering by net flow, 1-based ranks
//!
//! `PrometheeRanker` chains the stages. All stages are pure and hold no
//! state between runs.

mod alternative;
mod criterion;
mod decision_matrix;
mod errors;
mod events;
mod flows;
mod preference;
mod ranker;
mod ranking_result;
mod sorter;

pub use alternative::Alternative;
pub use criterion::{Criterion, CriterionDirection};
pub use decision_matrix::DecisionMatrix;
pub use errors::RankingError;
pub use events::RankingComputed;
pub use flows::{round2, FlowCalculator, FlowResult};
pub use preference::{PreferenceIndex, PreferenceTensor};
pub use ranker::PrometheeRanker;
pub use ranking_result::Ranking;
pub use sorter::{RankedEntry, RankingSorter};
