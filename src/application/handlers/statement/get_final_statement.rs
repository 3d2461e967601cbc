//! GetFinalStatementHandler - Query handler for a terminated council's statement.

use std::sync::Arc;

use crate::domain::council::CouncilError;
use crate::domain::foundation::{CommandMetadata, CouncilId};
use crate::domain::statement::FinalStatement;
use crate::ports::{CouncilRepository, MemberRepository, StatementRepository};

use super::super::support::{load_council, require_member};

#[derive(Debug, Clone)]
pub struct GetFinalStatementQuery {
    pub council_id: CouncilId,
}

pub struct GetFinalStatementHandler {
    councils: Arc<dyn CouncilRepository>,
    members: Arc<dyn MemberRepository>,
    statements: Arc<dyn StatementRepository>,
}

impl GetFinalStatementHandler {
    pub fn new(
        councils: Arc<dyn CouncilRepository>,
        members: Arc<dyn MemberRepository>,
        statements: Arc<dyn StatementRepository>,
    ) -> Self {
        Self {
            councils,
            members,
            statements,
        }
    }

    /// # Errors
    ///
    /// - `NotFound` while the council is still active
    pub async fn handle(
        &self,
        query: GetFinalStatementQuery,
        metadata: CommandMetadata,
    ) -> Result<FinalStatement, CouncilError> {
        let council = load_council(self.councils.as_ref(), &query.council_id).await?;
        require_member(self.members.as_ref(), council.id(), &metadata.actor).await?;

        self.statements
            .find(council.id())
            .await?
            .ok_or_else(|| CouncilError::not_found("Statement", council.id()))
    }
}
