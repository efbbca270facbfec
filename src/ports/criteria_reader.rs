//! Criteria reader port.
//!
//! Supplies the ordered criterion metadata whose directions drive the
//! preference rule, so changing a criterion from benefit to cost is a data
//! change rather than a code change.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::ranking::Criterion;

/// Port for reading criterion metadata.
#[async_trait]
pub trait CriteriaReader: Send + Sync {
    /// Returns criteria in the same order as alternative value vectors.
    async fn list_criteria(&self) -> Result<Vec<Criterion>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn CriteriaReader) {}
    }
}
