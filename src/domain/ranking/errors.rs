//! Ranking input errors.

use thiserror::Error;

use crate::domain::foundation::{AlternativeId, DomainError, ErrorCode};

/// Structural problems with a ranking input.
///
/// All variants are detected before any numeric work starts, so a failed
/// run never yields partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("At least 2 alternatives are required for a ranking, got {found}")]
    InsufficientData { found: usize },

    #[error("Alternative '{alternative_id}' is malformed: {reason}")]
    MalformedRecord {
        alternative_id: AlternativeId,
        reason: String,
    },

    #[error("Expected {expected} criterion directions, got {found}")]
    DirectionCountMismatch { expected: usize, found: usize },

    #[error("At least 2 criteria are required for flow normalization, got {found}")]
    DegenerateCriteriaSet { found: usize },
}

impl RankingError {
    pub fn insufficient_data(found: usize) -> Self {
        RankingError::InsufficientData { found }
    }

    /// Criterion vector has the wrong length.
    pub fn length_mismatch(alternative_id: AlternativeId, expected: usize, found: usize) -> Self {
        RankingError::MalformedRecord {
            alternative_id,
            reason: format!("expected {} criterion values, got {}", expected, found),
        }
    }

    /// Criterion value at `position` is NaN or infinite.
    pub fn non_finite(alternative_id: AlternativeId, position: usize) -> Self {
        RankingError::MalformedRecord {
            alternative_id,
            reason: format!("criterion value at position {} is not a finite number", position),
        }
    }

    pub fn direction_count_mismatch(expected: usize, found: usize) -> Self {
        RankingError::DirectionCountMismatch { expected, found }
    }

    pub fn degenerate_criteria(found: usize) -> Self {
        RankingError::DegenerateCriteriaSet { found }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::InsufficientData { .. } => ErrorCode::InsufficientData,
            RankingError::MalformedRecord { .. } => ErrorCode::MalformedRecord,
            RankingError::DirectionCountMismatch { .. } => ErrorCode::DirectionCountMismatch,
            RankingError::DegenerateCriteriaSet { .. } => ErrorCode::DegenerateCriteriaSet,
        }
    }
}

impl From<RankingError> for DomainError {
    fn from(err: RankingError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            RankingError::MalformedRecord { alternative_id, .. } => {
                base.with_detail("alternative_id", alternative_id.to_string())
            }
            _ => base,
        }
    }
}
