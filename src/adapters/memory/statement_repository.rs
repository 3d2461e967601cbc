//! In-memory final statement repository (write-once per council).

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CouncilId, DomainError, ErrorCode};
use crate::domain::statement::FinalStatement;
use crate::ports::StatementRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStatementRepository {
    statements: Arc<RwLock<HashMap<CouncilId, FinalStatement>>>,
}

impl InMemoryStatementRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.statements.read().await.len()
    }
}

#[async_trait]
impl StatementRepository for InMemoryStatementRepository {
    async fn save(&self, statement: &FinalStatement) -> Result<(), DomainError> {
        let mut statements = self.statements.write().await;
        match statements.entry(*statement.council_id()) {
            Entry::Occupied(_) => Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Council {} already has a final statement", statement.council_id()),
            )),
            Entry::Vacant(slot) => {
                slot.insert(statement.clone());
                Ok(())
            }
        }
    }

    async fn find(&self, council_id: &CouncilId) -> Result<Option<FinalStatement>, DomainError> {
        Ok(self.statements.read().await.get(council_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MotionKind, Timestamp};

    #[tokio::test]
    async fn statement_is_write_once() {
        let repo = InMemoryStatementRepository::new();
        let council = CouncilId::new();
        let first = FinalStatement::new(council, MotionKind::Close, "first".into(), Timestamp::now());
        let second =
            FinalStatement::new(council, MotionKind::Resolve, "second".into(), Timestamp::now());

        repo.save(&first).await.unwrap();
        let err = repo.save(&second).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(repo.find(&council).await.unwrap(), Some(first));
        assert_eq!(repo.count().await, 1);
    }
}
