//! Decision Matrix - the alternatives x criteria numeric table.

use crate::domain::foundation::AlternativeId;

use super::{Alternative, RankingError};

/// Row-major table of criterion values, one row per alternative.
///
/// Immutable once built; rows keep the order of the input alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    alternative_ids: Vec<AlternativeId>,
    criterion_count: usize,
    values: Vec<f64>,
}

impl DecisionMatrix {
    /// Builds the matrix from alternatives in input order.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` with fewer than 2 alternatives
    /// - `MalformedRecord` if a vector length differs from `criterion_count`
    ///   or a value is NaN/infinite
    pub fn build(alternatives: &[Alternative], criterion_count: usize) -> Result<Self, RankingError> {
        if alternatives.len() < 2 {
            return Err(RankingError::insufficient_data(alternatives.len()));
        }

        let mut values = Vec::with_capacity(alternatives.len() * criterion_count);
        for alt in alternatives {
            if alt.criterion_values.len() != criterion_count {
                return Err(RankingError::length_mismatch(
                    alt.id.clone(),
                    criterion_count,
                    alt.criterion_values.len(),
                ));
            }
            if let Some(position) = alt.criterion_values.iter().position(|v| !v.is_finite()) {
                return Err(RankingError::non_finite(alt.id.clone(), position));
            }
            values.extend_from_slice(&alt.criterion_values);
        }

        Ok(Self {
            alternative_ids: alternatives.iter().map(|a| a.id.clone()).collect(),
            criterion_count,
            values,
        })
    }

    pub fn alternative_count(&self) -> usize {
        self.alternative_ids.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criterion_count
    }

    pub fn alternative_ids(&self) -> &[AlternativeId] {
        &self.alternative_ids
    }

    /// Value of alternative `i` on criterion `k`.
    pub fn value(&self, i: usize, k: usize) -> f64 {
        self.values[i * self.criterion_count + k]
    }
}
