//! Council repository port.
//!
//! Persists the Council aggregate. Member rows live behind
//! `MemberRepository`; a council and its rows share the council's lifetime.

use async_trait::async_trait;

use crate::domain::council::Council;
use crate::domain::foundation::{CouncilId, DomainError};

/// Repository port for Council aggregate persistence.
#[async_trait]
pub trait CouncilRepository: Send + Sync {
    /// Save a new council.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the id is already taken
    /// - `DatabaseError` on persistence failure
    async fn save(&self, council: &Council) -> Result<(), DomainError>;

    /// Update an existing council.
    ///
    /// # Errors
    ///
    /// - `CouncilNotFound` if the council doesn't exist
    async fn update(&self, council: &Council) -> Result<(), DomainError>;

    /// Find a council by its ID.
    async fn find_by_id(&self, id: &CouncilId) -> Result<Option<Council>, DomainError>;
}
