//! PROMETHEE-style ranker - runs the full pipeline.

use tracing::debug;

use super::{
    Alternative, Criterion, CriterionDirection, DecisionMatrix, FlowCalculator, PreferenceTensor,
    RankedEntry, RankingError, RankingSorter,
};

/// Stateless outranking pipeline:
/// matrix → preference tensor → aggregate index → flows → sorted ranking.
pub struct PrometheeRanker;

impl PrometheeRanker {
    /// Ranks alternatives against an ordered criterion list.
    pub fn rank_with_criteria(
        alternatives: &[Alternative],
        criteria: &[Criterion],
    ) -> Result<Vec<RankedEntry>, RankingError> {
        Self::rank(alternatives, criteria.len(), &Criterion::directions(criteria))
    }

    /// Ranks alternatives whose vectors hold `criterion_count` values.
    ///
    /// Input shape is validated before any computation, in this order:
    /// alternative count, criterion count, direction count, then each
    /// record. On error nothing is returned.
    pub fn rank(
        alternatives: &[Alternative],
        criterion_count: usize,
        directions: &[CriterionDirection],
    ) -> Result<Vec<RankedEntry>, RankingError> {
        Self::validate(alternatives, criterion_count, directions)?;

        let matrix = DecisionMatrix::build(alternatives, criterion_count)?;
        let index = PreferenceTensor::build(&matrix, directions)?.aggregate();
        let flows = FlowCalculator::compute(&index)?;
        let entries = RankingSorter::rank(flows, alternatives);

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "Computed outranking flows"
        );

        Ok(entries)
    }

    fn validate(
        alternatives: &[Alternative],
        criterion_count: usize,
        directions: &[CriterionDirection],
    ) -> Result<(), RankingError> {
        if alternatives.len() < 2 {
            return Err(RankingError::insufficient_data(alternatives.len()));
        }
        if criterion_count < 2 {
            return Err(RankingError::degenerate_criteria(criterion_count));
        }
        if directions.len() != criterion_count {
            return Err(RankingError::direction_count_mismatch(
                criterion_count,
                directions.len(),
            ));
        }
        Ok(())
    }
}
