//! Opinion repository port.
//!
//! Opinions are keyed by (conclusion, author). `upsert` is linearizable per
//! key: two concurrent submissions by the same member on the same conclusion
//! leave exactly one row.

use async_trait::async_trait;

use crate::domain::conclusion::Opinion;
use crate::domain::foundation::{ConclusionId, DomainError, Username};

/// Outcome of an opinion upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpinionUpsert {
    /// The row as stored after the write.
    pub stored: Opinion,
    /// True when an existing row was overwritten.
    pub was_update: bool,
}

/// Repository port for opinions.
#[async_trait]
pub trait OpinionRepository: Send + Sync {
    /// Insert, or overwrite stance, reasoning and `updated_at` of the row with
    /// the same key. An overwritten row keeps its id and `created_at`.
    async fn upsert(&self, opinion: Opinion) -> Result<OpinionUpsert, DomainError>;

    async fn find(
        &self,
        conclusion_id: &ConclusionId,
        author: &Username,
    ) -> Result<Option<Opinion>, DomainError>;

    async fn list_by_conclusion(
        &self,
        conclusion_id: &ConclusionId,
    ) -> Result<Vec<Opinion>, DomainError>;

    /// Opinions on any of the given conclusions.
    async fn list_for_conclusions(
        &self,
        conclusion_ids: &[ConclusionId],
    ) -> Result<Vec<Opinion>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opinion_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn OpinionRepository) {}
    }
}
