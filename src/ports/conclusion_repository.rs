//! Conclusion repository port.

use async_trait::async_trait;

use crate::domain::conclusion::Conclusion;
use crate::domain::foundation::{ConclusionId, CouncilId, DomainError};

/// Repository port for conclusions and amendments.
#[async_trait]
pub trait ConclusionRepository: Send + Sync {
    async fn save(&self, conclusion: &Conclusion) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `ConclusionNotFound` if the conclusion doesn't exist
    async fn update(&self, conclusion: &Conclusion) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &ConclusionId) -> Result<Option<Conclusion>, DomainError>;

    /// Every conclusion of a council, active or not, in proposal order.
    async fn list_by_council(&self, council_id: &CouncilId)
        -> Result<Vec<Conclusion>, DomainError>;

    /// Number of conclusions (including amendments) in a council.
    async fn count_by_council(&self, council_id: &CouncilId) -> Result<usize, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conclusion_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ConclusionRepository) {}
    }
}
