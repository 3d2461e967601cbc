//! In-memory resolution motion repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CouncilId, DomainError, ErrorCode, MotionId, Stance, Username};
use crate::domain::resolution::ResolutionMotion;
use crate::ports::{MotionRepository, VoteUpsert};

#[derive(Debug, Clone, Default)]
pub struct InMemoryMotionRepository {
    motions: Arc<RwLock<HashMap<MotionId, ResolutionMotion>>>,
}

impl InMemoryMotionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: &MotionId) -> DomainError {
    DomainError::new(ErrorCode::MotionNotFound, "Motion not found").with_detail("id", id.to_string())
}

#[async_trait]
impl MotionRepository for InMemoryMotionRepository {
    async fn save(&self, motion: &ResolutionMotion) -> Result<(), DomainError> {
        let mut motions = self.motions.write().await;
        if motions.contains_key(motion.id()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Motion {} already exists", motion.id()),
            ));
        }
        motions.insert(*motion.id(), motion.clone());
        Ok(())
    }

    async fn update(&self, motion: &ResolutionMotion) -> Result<(), DomainError> {
        let mut motions = self.motions.write().await;
        let stored = motions.get_mut(motion.id()).ok_or_else(|| not_found(motion.id()))?;
        *stored = motion.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &MotionId) -> Result<Option<ResolutionMotion>, DomainError> {
        Ok(self.motions.read().await.get(id).cloned())
    }

    async fn find_pending(
        &self,
        council_id: &CouncilId,
    ) -> Result<Option<ResolutionMotion>, DomainError> {
        let motions = self.motions.read().await;
        Ok(motions
            .values()
            .find(|m| m.council_id() == council_id && m.is_pending())
            .cloned())
    }

    async fn list_by_council(
        &self,
        council_id: &CouncilId,
    ) -> Result<Vec<ResolutionMotion>, DomainError> {
        let motions = self.motions.read().await;
        let mut listed: Vec<ResolutionMotion> = motions
            .values()
            .filter(|m| m.council_id() == council_id)
            .cloned()
            .collect();
        listed.sort_by(|a, b| {
            a.proposed_at()
                .cmp(b.proposed_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(listed)
    }

    async fn upsert_vote(
        &self,
        motion_id: &MotionId,
        voter: &Username,
        stance: Stance,
    ) -> Result<VoteUpsert, DomainError> {
        let mut motions = self.motions.write().await;
        let motion = motions.get_mut(motion_id).ok_or_else(|| not_found(motion_id))?;
        let previous = motion.cast_vote(voter.clone(), stance)?;
        Ok(VoteUpsert {
            motion: motion.clone(),
            previous,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MotionKind, Timestamp};

    fn user(name: &str) -> Username {
        Username::new(name).unwrap()
    }

    #[tokio::test]
    async fn upsert_vote_replaces_previous() {
        let repo = InMemoryMotionRepository::new();
        let motion =
            ResolutionMotion::propose(MotionId::new(), CouncilId::new(), MotionKind::Close, user("alice"));
        repo.save(&motion).await.unwrap();

        let first = repo
            .upsert_vote(motion.id(), &user("bob_1"), Stance::Oppose)
            .await
            .unwrap();
        assert_eq!(first.previous, None);

        let second = repo
            .upsert_vote(motion.id(), &user("bob_1"), Stance::Support)
            .await
            .unwrap();
        assert_eq!(second.previous, Some(Stance::Oppose));
        assert_eq!(second.motion.votes().len(), 1);
    }

    #[tokio::test]
    async fn upsert_vote_on_closed_motion_fails() {
        let repo = InMemoryMotionRepository::new();
        let mut motion =
            ResolutionMotion::propose(MotionId::new(), CouncilId::new(), MotionKind::Close, user("alice"));
        motion.mark_passed(Timestamp::now()).unwrap();
        repo.save(&motion).await.unwrap();

        let err = repo
            .upsert_vote(motion.id(), &user("bob_1"), Stance::Support)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MotionNotPending);

        let err = repo
            .upsert_vote(&MotionId::new(), &user("bob_1"), Stance::Support)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MotionNotFound);
    }

    #[tokio::test]
    async fn find_pending_skips_closed_motions() {
        let repo = InMemoryMotionRepository::new();
        let council = CouncilId::new();
        let mut withdrawn =
            ResolutionMotion::propose(MotionId::new(), council, MotionKind::Resolve, user("alice"));
        withdrawn.withdraw(&user("alice"), Timestamp::now()).unwrap();
        repo.save(&withdrawn).await.unwrap();
        assert!(repo.find_pending(&council).await.unwrap().is_none());

        let pending =
            ResolutionMotion::propose(MotionId::new(), council, MotionKind::Close, user("alice"));
        repo.save(&pending).await.unwrap();
        assert_eq!(repo.find_pending(&council).await.unwrap(), Some(pending));
        assert_eq!(repo.list_by_council(&council).await.unwrap().len(), 2);
    }
}
