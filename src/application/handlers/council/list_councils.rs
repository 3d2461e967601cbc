//! ListCouncilsHandler - Query handler for the caller's councils.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::council::{Council, CouncilError};
use crate::domain::foundation::{CommandMetadata, CouncilStatus, MemberStatus};
use crate::ports::{CouncilRepository, MemberRepository};

/// Query for every council the caller has a member row in.
#[derive(Debug, Clone, Default)]
pub struct ListCouncilsQuery {
    /// Only councils in this status.
    pub status: Option<CouncilStatus>,
}

impl ListCouncilsQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn active() -> Self {
        Self {
            status: Some(CouncilStatus::Active),
        }
    }
}

/// A council together with the caller's own membership status.
#[derive(Debug, Clone, Serialize)]
pub struct CouncilSummary {
    pub council: Council,
    pub membership: MemberStatus,
}

pub struct ListCouncilsHandler {
    councils: Arc<dyn CouncilRepository>,
    members: Arc<dyn MemberRepository>,
}

impl ListCouncilsHandler {
    pub fn new(councils: Arc<dyn CouncilRepository>, members: Arc<dyn MemberRepository>) -> Self {
        Self { councils, members }
    }

    /// Most recently convened first.
    pub async fn handle(
        &self,
        query: ListCouncilsQuery,
        metadata: CommandMetadata,
    ) -> Result<Vec<CouncilSummary>, CouncilError> {
        let rows = self.members.list_by_username(&metadata.actor).await?;

        let mut summaries = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(council) = self.councils.find_by_id(row.council_id()).await? else {
                continue;
            };
            if query.status.map_or(true, |s| s == council.status()) {
                summaries.push(CouncilSummary {
                    council,
                    membership: row.status(),
                });
            }
        }
        summaries.sort_by(|a, b| {
            b.council
                .created_at()
                .cmp(a.council.created_at())
                .then_with(|| a.council.id().cmp(b.council.id()))
        });

        debug!(actor = %metadata.actor, count = summaries.len(), "listed councils");
        Ok(summaries)
    }
}
