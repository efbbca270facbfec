//! Pairwise preference indicators and their multi-criteria aggregate.

use crate::domain::foundation::AlternativeId;

use super::{CriterionDirection, DecisionMatrix, RankingError};

/// Rank-3 table of 0/1 indicators indexed by (i, j, k).
///
/// Every ordered pair is present, including the diagonal i = j, which
/// holds 0 on benefit criteria and 1 on cost criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceTensor {
    alternative_ids: Vec<AlternativeId>,
    alternative_count: usize,
    criterion_count: usize,
    indicators: Vec<u8>,
}

impl PreferenceTensor {
    /// Computes indicator(i, j, k) for every ordered pair and criterion.
    ///
    /// # Errors
    ///
    /// `DirectionCountMismatch` if `directions.len()` differs from the
    /// matrix criterion count.
    pub fn build(
        matrix: &DecisionMatrix,
        directions: &[CriterionDirection],
    ) -> Result<Self, RankingError> {
        let n = matrix.alternative_count();
        let k_count = matrix.criterion_count();
        if directions.len() != k_count {
            return Err(RankingError::direction_count_mismatch(k_count, directions.len()));
        }

        let mut indicators = vec![0u8; n * n * k_count];
        for (k, direction) in directions.iter().enumerate() {
            for i in 0..n {
                for j in 0..n {
                    let difference = matrix.value(i, k) - matrix.value(j, k);
                    indicators[(i * n + j) * k_count + k] = direction.indicator(difference);
                }
            }
        }

        Ok(Self {
            alternative_ids: matrix.alternative_ids().to_vec(),
            alternative_count: n,
            criterion_count: k_count,
            indicators,
        })
    }

    pub fn alternative_count(&self) -> usize {
        self.alternative_count
    }

    pub fn criterion_count(&self) -> usize {
        self.criterion_count
    }

    pub fn indicator(&self, i: usize, j: usize, k: usize) -> u8 {
        self.indicators[(i * self.alternative_count + j) * self.criterion_count + k]
    }

    /// Averages indicators over criteria into P(i, j).
    ///
    /// Unweighted: every criterion counts equally. A tensor over zero
    /// criteria (reachable when stages are called directly) yields an
    /// all-zero index rather than NaN; `FlowCalculator` then rejects it.
    pub fn aggregate(&self) -> PreferenceIndex {
        let n = self.alternative_count;
        let k_count = self.criterion_count;
        let mut values = vec![0.0; n * n];

        if k_count > 0 {
            for (pair, cell) in values.iter_mut().enumerate() {
                let start = pair * k_count;
                let sum: u32 = self.indicators[start..start + k_count]
                    .iter()
                    .map(|&v| u32::from(v))
                    .sum();
                *cell = f64::from(sum) / k_count as f64;
            }
        }

        PreferenceIndex {
            alternative_ids: self.alternative_ids.clone(),
            criterion_count: k_count,
            values,
        }
    }
}

/// Aggregate multi-criteria preference matrix P(i, j) in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceIndex {
    alternative_ids: Vec<AlternativeId>,
    criterion_count: usize,
    values: Vec<f64>,
}

impl PreferenceIndex {
    pub fn alternative_ids(&self) -> &[AlternativeId] {
        &self.alternative_ids
    }

    pub fn alternative_count(&self) -> usize {
        self.alternative_ids.len()
    }

    /// Number of criteria the indicators were averaged over.
    pub fn criterion_count(&self) -> usize {
        self.criterion_count
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.alternative_count() + j]
    }

    /// Σ_j P(i, j)
    pub fn row_sum(&self, i: usize) -> f64 {
        (0..self.alternative_count()).map(|j| self.get(i, j)).sum()
    }

    /// Σ_j P(j, i)
    pub fn column_sum(&self, i: usize) -> f64 {
        (0..self.alternative_count()).map(|j| self.get(j, i)).sum()
    }
}
