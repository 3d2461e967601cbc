//! GetCouncilViewHandler - Query handler for the full state of one council.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::conclusion::{Conclusion, Opinion, OpinionTally};
use crate::domain::council::{Council, CouncilError, Member};
use crate::domain::foundation::{CommandMetadata, CouncilId, Username};
use crate::domain::resolution::ResolutionMotion;
use crate::domain::statement::FinalStatement;
use crate::ports::{
    ConclusionRepository, CouncilRepository, MemberRepository, MotionRepository,
    OpinionRepository, StatementRepository,
};

use super::super::support::{load_council, require_member};

#[derive(Debug, Clone)]
pub struct GetCouncilViewQuery {
    pub council_id: CouncilId,
}

/// An active conclusion with every opinion recorded on it.
#[derive(Debug, Clone, Serialize)]
pub struct ConclusionView {
    pub conclusion: Conclusion,
    pub opinions: Vec<Opinion>,
    /// Counts only currently accepted members.
    pub tally: OpinionTally,
}

/// Snapshot of a council for display.
#[derive(Debug, Clone, Serialize)]
pub struct CouncilView {
    pub council: Council,
    pub members: Vec<Member>,
    pub accepted_count: usize,
    /// Active conclusions, most recent first.
    pub conclusions: Vec<ConclusionView>,
    pub active_motion: Option<ResolutionMotion>,
    /// Every motion, oldest first.
    pub motions: Vec<ResolutionMotion>,
    pub statement: Option<FinalStatement>,
}

pub struct GetCouncilViewHandler {
    councils: Arc<dyn CouncilRepository>,
    members: Arc<dyn MemberRepository>,
    conclusions: Arc<dyn ConclusionRepository>,
    opinions: Arc<dyn OpinionRepository>,
    motions: Arc<dyn MotionRepository>,
    statements: Arc<dyn StatementRepository>,
}

impl GetCouncilViewHandler {
    pub fn new(
        councils: Arc<dyn CouncilRepository>,
        members: Arc<dyn MemberRepository>,
        conclusions: Arc<dyn ConclusionRepository>,
        opinions: Arc<dyn OpinionRepository>,
        motions: Arc<dyn MotionRepository>,
        statements: Arc<dyn StatementRepository>,
    ) -> Self {
        Self {
            councils,
            members,
            conclusions,
            opinions,
            motions,
            statements,
        }
    }

    /// Any member row, invited and declined included, may read the view.
    pub async fn handle(
        &self,
        query: GetCouncilViewQuery,
        metadata: CommandMetadata,
    ) -> Result<CouncilView, CouncilError> {
        let council = load_council(self.councils.as_ref(), &query.council_id).await?;
        require_member(self.members.as_ref(), council.id(), &metadata.actor).await?;

        let members = self.members.list_by_council(council.id()).await?;
        let accepted: BTreeSet<Username> = members
            .iter()
            .filter(|m| m.is_accepted())
            .map(|m| m.username().clone())
            .collect();

        let mut active: Vec<Conclusion> = self
            .conclusions
            .list_by_council(council.id())
            .await?
            .into_iter()
            .filter(Conclusion::is_active)
            .collect();
        active.sort_by(|a, b| Conclusion::chronological(b, a));

        let ids: Vec<_> = active.iter().map(|c| *c.id()).collect();
        let opinions = self.opinions.list_for_conclusions(&ids).await?;

        let conclusions = active
            .into_iter()
            .map(|conclusion| {
                let tally = OpinionTally::of(conclusion.id(), &opinions, &accepted);
                let opinions = opinions
                    .iter()
                    .filter(|o| o.conclusion_id() == conclusion.id())
                    .cloned()
                    .collect();
                ConclusionView {
                    conclusion,
                    opinions,
                    tally,
                }
            })
            .collect();

        let motions = self.motions.list_by_council(council.id()).await?;
        let active_motion = motions.iter().find(|m| m.is_pending()).cloned();
        let statement = self.statements.find(council.id()).await?;
        let accepted_count = self.members.count_accepted(council.id()).await?;

        debug!(council_id = %council.id(), actor = %metadata.actor, "council view loaded");

        Ok(CouncilView {
            accepted_count,
            council,
            members,
            conclusions,
            active_motion,
            motions,
            statement,
        })
    }
}
