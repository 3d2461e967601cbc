//! In-memory council repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::council::Council;
use crate::domain::foundation::{CouncilId, DomainError, ErrorCode};
use crate::ports::CouncilRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCouncilRepository {
    councils: Arc<RwLock<HashMap<CouncilId, Council>>>,
}

impl InMemoryCouncilRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.councils.read().await.len()
    }
}

#[async_trait]
impl CouncilRepository for InMemoryCouncilRepository {
    async fn save(&self, council: &Council) -> Result<(), DomainError> {
        let mut councils = self.councils.write().await;
        if councils.contains_key(council.id()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Council {} already exists", council.id()),
            ));
        }
        councils.insert(*council.id(), council.clone());
        Ok(())
    }

    async fn update(&self, council: &Council) -> Result<(), DomainError> {
        let mut councils = self.councils.write().await;
        match councils.get_mut(council.id()) {
            Some(stored) => {
                *stored = council.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::CouncilNotFound, "Council not found")
                .with_detail("id", council.id().to_string())),
        }
    }

    async fn find_by_id(&self, id: &CouncilId) -> Result<Option<Council>, DomainError> {
        Ok(self.councils.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MotionKind, Timestamp, Username};

    fn council() -> Council {
        Council::new(
            CouncilId::new(),
            "Where should the library go?",
            Username::new("alice").unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_then_find() {
        let repo = InMemoryCouncilRepository::new();
        let c = council();
        repo.save(&c).await.unwrap();

        assert_eq!(repo.find_by_id(c.id()).await.unwrap(), Some(c));
        assert_eq!(repo.find_by_id(&CouncilId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_twice_conflicts() {
        let repo = InMemoryCouncilRepository::new();
        let c = council();
        repo.save(&c).await.unwrap();

        let err = repo.save(&c).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn update_replaces_and_requires_existing() {
        let repo = InMemoryCouncilRepository::new();
        let mut c = council();

        let err = repo.update(&c).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CouncilNotFound);

        repo.save(&c).await.unwrap();
        c.terminate(MotionKind::Close, Timestamp::now()).unwrap();
        repo.update(&c).await.unwrap();

        let stored = repo.find_by_id(c.id()).await.unwrap().unwrap();
        assert!(!stored.is_active());
    }
}
