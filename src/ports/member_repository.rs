//! Member repository port.

use async_trait::async_trait;

use crate::domain::council::Member;
use crate::domain::foundation::{CouncilId, DomainError, Username};

/// Repository port for council membership rows.
///
/// Rows are unique per (council, username). Listing by council returns rows
/// in insertion order, which is the membership order used in statements.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert the row unless one already exists for the same key.
    ///
    /// Returns `true` if the row was inserted.
    async fn insert_if_absent(&self, member: &Member) -> Result<bool, DomainError>;

    /// Replace an existing row.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if no row exists for the key
    async fn update(&self, member: &Member) -> Result<(), DomainError>;

    async fn find(
        &self,
        council_id: &CouncilId,
        username: &Username,
    ) -> Result<Option<Member>, DomainError>;

    /// All rows of a council, any status, in insertion order.
    async fn list_by_council(&self, council_id: &CouncilId) -> Result<Vec<Member>, DomainError>;

    /// Number of accepted members right now. Never cached.
    async fn count_accepted(&self, council_id: &CouncilId) -> Result<usize, DomainError>;

    /// Every row held by a username, across councils.
    async fn list_by_username(&self, username: &Username) -> Result<Vec<Member>, DomainError>;
}
