//! Resolution motion repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CouncilId, DomainError, MotionId, Stance, Username};
use crate::domain::resolution::ResolutionMotion;

/// Outcome of a vote upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteUpsert {
    /// The motion as stored after the write.
    pub motion: ResolutionMotion,
    /// The member's earlier vote, if any.
    pub previous: Option<Stance>,
}

/// Repository port for resolution motions and their votes.
#[async_trait]
pub trait MotionRepository: Send + Sync {
    async fn save(&self, motion: &ResolutionMotion) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `MotionNotFound` if the motion doesn't exist
    async fn update(&self, motion: &ResolutionMotion) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &MotionId) -> Result<Option<ResolutionMotion>, DomainError>;

    /// The council's pending motion, if one exists.
    async fn find_pending(
        &self,
        council_id: &CouncilId,
    ) -> Result<Option<ResolutionMotion>, DomainError>;

    /// Every motion of a council, oldest first.
    async fn list_by_council(
        &self,
        council_id: &CouncilId,
    ) -> Result<Vec<ResolutionMotion>, DomainError>;

    /// Record or replace one member's vote, linearizable per (motion, member).
    ///
    /// # Errors
    ///
    /// - `MotionNotFound` if the motion doesn't exist
    /// - `MotionNotPending` if the motion already passed or was withdrawn
    async fn upsert_vote(
        &self,
        motion_id: &MotionId,
        voter: &Username,
        stance: Stance,
    ) -> Result<VoteUpsert, DomainError>;
}
