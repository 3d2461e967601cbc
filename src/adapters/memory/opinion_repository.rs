//! In-memory opinion repository.
//!
//! The read-modify-write of `upsert` happens under one write guard, which
//! makes it linearizable per (conclusion, author).

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::conclusion::Opinion;
use crate::domain::foundation::{ConclusionId, DomainError, Username};
use crate::ports::{OpinionRepository, OpinionUpsert};

type OpinionKey = (ConclusionId, Username);

#[derive(Debug, Clone, Default)]
pub struct InMemoryOpinionRepository {
    opinions: Arc<RwLock<BTreeMap<OpinionKey, Opinion>>>,
}

impl InMemoryOpinionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OpinionRepository for InMemoryOpinionRepository {
    async fn upsert(&self, opinion: Opinion) -> Result<OpinionUpsert, DomainError> {
        let mut opinions = self.opinions.write().await;
        let key = (*opinion.conclusion_id(), opinion.author().clone());

        let (stored, was_update) = match opinions.get_mut(&key) {
            Some(existing) => {
                existing.revise_from(&opinion);
                (existing.clone(), true)
            }
            None => {
                opinions.insert(key, opinion.clone());
                (opinion, false)
            }
        };
        debug!(
            conclusion_id = %stored.conclusion_id(),
            author = %stored.author(),
            was_update,
            "opinion upserted"
        );
        Ok(OpinionUpsert { stored, was_update })
    }

    async fn find(
        &self,
        conclusion_id: &ConclusionId,
        author: &Username,
    ) -> Result<Option<Opinion>, DomainError> {
        let opinions = self.opinions.read().await;
        Ok(opinions.get(&(*conclusion_id, author.clone())).cloned())
    }

    async fn list_by_conclusion(
        &self,
        conclusion_id: &ConclusionId,
    ) -> Result<Vec<Opinion>, DomainError> {
        self.list_for_conclusions(std::slice::from_ref(conclusion_id))
            .await
    }

    async fn list_for_conclusions(
        &self,
        conclusion_ids: &[ConclusionId],
    ) -> Result<Vec<Opinion>, DomainError> {
        let opinions = self.opinions.read().await;
        Ok(opinions
            .values()
            .filter(|o| conclusion_ids.contains(o.conclusion_id()))
            .cloned()
            .collect())
    }
}
