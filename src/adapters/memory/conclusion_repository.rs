//! In-memory conclusion repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conclusion::Conclusion;
use crate::domain::foundation::{ConclusionId, CouncilId, DomainError, ErrorCode};
use crate::ports::ConclusionRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryConclusionRepository {
    conclusions: Arc<RwLock<HashMap<ConclusionId, Conclusion>>>,
}

impl InMemoryConclusionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConclusionRepository for InMemoryConclusionRepository {
    async fn save(&self, conclusion: &Conclusion) -> Result<(), DomainError> {
        let mut conclusions = self.conclusions.write().await;
        if conclusions.contains_key(conclusion.id()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Conclusion {} already exists", conclusion.id()),
            ));
        }
        conclusions.insert(*conclusion.id(), conclusion.clone());
        Ok(())
    }

    async fn update(&self, conclusion: &Conclusion) -> Result<(), DomainError> {
        let mut conclusions = self.conclusions.write().await;
        match conclusions.get_mut(conclusion.id()) {
            Some(stored) => {
                *stored = conclusion.clone();
                Ok(())
            }
            None => Err(
                DomainError::new(ErrorCode::ConclusionNotFound, "Conclusion not found")
                    .with_detail("id", conclusion.id().to_string()),
            ),
        }
    }

    async fn find_by_id(&self, id: &ConclusionId) -> Result<Option<Conclusion>, DomainError> {
        Ok(self.conclusions.read().await.get(id).cloned())
    }

    async fn list_by_council(
        &self,
        council_id: &CouncilId,
    ) -> Result<Vec<Conclusion>, DomainError> {
        let conclusions = self.conclusions.read().await;
        let mut listed: Vec<Conclusion> = conclusions
            .values()
            .filter(|c| c.council_id() == council_id)
            .cloned()
            .collect();
        listed.sort_by(Conclusion::chronological);
        Ok(listed)
    }

    async fn count_by_council(&self, council_id: &CouncilId) -> Result<usize, DomainError> {
        let conclusions = self.conclusions.read().await;
        Ok(conclusions
            .values()
            .filter(|c| c.council_id() == council_id)
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, Username};

    fn alice() -> Username {
        Username::new("alice").unwrap()
    }

    fn at(council: CouncilId, text: &str, secs: i64) -> Conclusion {
        Conclusion::reconstitute(
            ConclusionId::new(),
            council,
            text.into(),
            alice(),
            Timestamp::from_unix_secs(secs),
            None,
            None,
            true,
        )
    }

    #[tokio::test]
    async fn list_by_council_is_chronological_and_scoped() {
        let repo = InMemoryConclusionRepository::new();
        let council = CouncilId::new();
        let first = at(council, "First idea", 100);
        let second = at(council, "Second idea", 200);
        let elsewhere = at(CouncilId::new(), "Other room", 150);
        for c in [&second, &elsewhere, &first] {
            repo.save(c).await.unwrap();
        }

        let listed = repo.list_by_council(&council).await.unwrap();
        assert_eq!(listed, vec![first, second]);
        assert_eq!(repo.count_by_council(&council).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn update_persists_supersession() {
        let repo = InMemoryConclusionRepository::new();
        let mut c = at(CouncilId::new(), "An idea", 100);
        repo.save(&c).await.unwrap();
        c.supersede_by(ConclusionId::new()).unwrap();
        repo.update(&c).await.unwrap();

        let stored = repo.find_by_id(c.id()).await.unwrap().unwrap();
        assert!(!stored.is_active());
        assert_eq!(
            repo.update(&at(CouncilId::new(), "Unsaved", 1)).await.unwrap_err().code,
            ErrorCode::ConclusionNotFound
        );
    }
}
