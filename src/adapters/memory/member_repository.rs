//! In-memory member repository.
//!
//! Rows per council are kept in a `Vec` so listing preserves insertion order.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::council::Member;
use crate::domain::foundation::{CouncilId, DomainError, ErrorCode, Username};
use crate::ports::MemberRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberRepository {
    rows: Arc<RwLock<HashMap<CouncilId, Vec<Member>>>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn insert_if_absent(&self, member: &Member) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        let council_rows = rows.entry(*member.council_id()).or_default();
        if council_rows.iter().any(|m| m.username() == member.username()) {
            return Ok(false);
        }
        council_rows.push(member.clone());
        Ok(true)
    }

    async fn update(&self, member: &Member) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        let stored = rows
            .get_mut(member.council_id())
            .and_then(|council_rows| {
                council_rows
                    .iter_mut()
                    .find(|m| m.username() == member.username())
            })
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::MemberNotFound,
                    format!("{} is not a member of this council", member.username()),
                )
                .with_detail("id", member.username().to_string())
            })?;
        *stored = member.clone();
        Ok(())
    }

    async fn find(
        &self,
        council_id: &CouncilId,
        username: &Username,
    ) -> Result<Option<Member>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .get(council_id)
            .and_then(|council_rows| council_rows.iter().find(|m| m.username() == username))
            .cloned())
    }

    async fn list_by_council(&self, council_id: &CouncilId) -> Result<Vec<Member>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows.get(council_id).cloned().unwrap_or_default())
    }

    async fn count_accepted(&self, council_id: &CouncilId) -> Result<usize, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .get(council_id)
            .map(|council_rows| council_rows.iter().filter(|m| m.is_accepted()).count())
            .unwrap_or(0))
    }

    async fn list_by_username(&self, username: &Username) -> Result<Vec<Member>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .flatten()
            .filter(|m| m.username() == username)
            .cloned()
            .collect())
    }
}
