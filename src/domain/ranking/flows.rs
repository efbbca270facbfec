//! Flow Calculator - leaving, entering, and net flow per alternative.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AlternativeId;

use super::{PreferenceIndex, RankingError};

/// Outranking flows of a single alternative, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowResult {
    pub alternative_id: AlternativeId,
    pub leaving_flow: f64,
    pub entering_flow: f64,
    pub net_flow: f64,
}

/// Rounds to 2 decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub struct FlowCalculator;

impl FlowCalculator {
    /// Computes flows for every alternative of the index, in index order.
    ///
    /// # Algorithm
    /// - leaving(i)  = Σ_j P(i, j) × 1/(K − 1)
    /// - entering(i) = Σ_j P(j, i) × 1/(K − 1)
    /// - net(i)      = leaving(i) − entering(i)
    ///
    /// The normalizer uses the criterion count K. Leaving and entering are
    /// rounded first; net is derived from the rounded values and rounded
    /// again.
    ///
    /// # Errors
    /// `DegenerateCriteriaSet` when K < 2.
    pub fn compute(index: &PreferenceIndex) -> Result<Vec<FlowResult>, RankingError> {
        let k_count = index.criterion_count();
        if k_count < 2 {
            return Err(RankingError::degenerate_criteria(k_count));
        }
        let factor = 1.0 / (k_count - 1) as f64;

        let flows = index
            .alternative_ids()
            .iter()
            .enumerate()
            .map(|(i, id)| {
                // Sums run left to right. Vectorized reductions may differ in
                // the last bit, which can move a value sitting exactly on a
                // .xx5 boundary; results match only up to summation order.
                let leaving_flow = round2(index.row_sum(i) * factor);
                let entering_flow = round2(index.column_sum(i) * factor);
                FlowResult {
                    alternative_id: id.clone(),
                    leaving_flow,
                    entering_flow,
                    net_flow: round2(leaving_flow - entering_flow),
                }
            })
            .collect();

        Ok(flows)
    }
}
