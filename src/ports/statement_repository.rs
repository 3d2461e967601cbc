//! Final statement repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CouncilId, DomainError};
use crate::domain::statement::FinalStatement;

/// Repository port for final statements. Write-once per council.
#[async_trait]
pub trait StatementRepository: Send + Sync {
    /// # Errors
    ///
    /// - `Conflict` if the council already has a statement
    async fn save(&self, statement: &FinalStatement) -> Result<(), DomainError>;

    async fn find(&self, council_id: &CouncilId) -> Result<Option<FinalStatement>, DomainError>;
}
