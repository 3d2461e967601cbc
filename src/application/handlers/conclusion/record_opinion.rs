//! RecordOpinionHandler - Command handler for upserting a member's opinion.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::CouncilLocks;
use crate::domain::conclusion::{Conclusion, Opinion, OpinionRecorded};
use crate::domain::council::CouncilError;
use crate::domain::foundation::{CommandMetadata, ConclusionId, EventId, Stance};
use crate::ports::{
    ConclusionRepository, CouncilRepository, EventPublisher, MemberRepository, OpinionRepository,
};

use super::super::support::{envelope, load_council, publish_committed, require_accepted};

#[derive(Debug, Clone)]
pub struct RecordOpinionCommand {
    pub conclusion_id: ConclusionId,
    pub stance: Stance,
    pub reasoning: String,
}

#[derive(Debug, Clone)]
pub struct RecordOpinionResult {
    pub opinion: Opinion,
    pub event: OpinionRecorded,
}

pub struct RecordOpinionHandler {
    councils: Arc<dyn CouncilRepository>,
    members: Arc<dyn MemberRepository>,
    conclusions: Arc<dyn ConclusionRepository>,
    opinions: Arc<dyn OpinionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<CouncilLocks>,
}

impl RecordOpinionHandler {
    pub fn new(
        councils: Arc<dyn CouncilRepository>,
        members: Arc<dyn MemberRepository>,
        conclusions: Arc<dyn ConclusionRepository>,
        opinions: Arc<dyn OpinionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        locks: Arc<CouncilLocks>,
    ) -> Self {
        Self {
            councils,
            members,
            conclusions,
            opinions,
            event_publisher,
            locks,
        }
    }

    /// A second call by the same member overwrites stance and reasoning.
    pub async fn handle(
        &self,
        cmd: RecordOpinionCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordOpinionResult, CouncilError> {
        let council_id = *self.find_conclusion(&cmd.conclusion_id).await?.council_id();
        let guard = self.locks.acquire(&council_id).await;

        let council = load_council(self.councils.as_ref(), &council_id).await?;
        require_accepted(self.members.as_ref(), council.id(), &metadata.actor).await?;
        council.ensure_active()?;

        // Supersession only happens under this lock; re-read to be sure.
        let conclusion = self.find_conclusion(&cmd.conclusion_id).await?;
        conclusion.ensure_active()?;

        let opinion = Opinion::new(
            *conclusion.id(),
            metadata.actor.clone(),
            cmd.stance,
            &cmd.reasoning,
        )?;
        let upsert = self.opinions.upsert(opinion).await?;
        drop(guard);

        if upsert.was_update {
            debug!(conclusion_id = %conclusion.id(), author = %metadata.actor, "opinion revised");
        } else {
            info!(conclusion_id = %conclusion.id(), author = %metadata.actor, "opinion recorded");
        }

        let stored = upsert.stored;
        let event = OpinionRecorded {
            event_id: EventId::new(),
            opinion_id: *stored.id(),
            conclusion_id: *stored.conclusion_id(),
            council_id,
            author: stored.author().clone(),
            stance: stored.stance(),
            was_update: upsert.was_update,
            recorded_at: *stored.updated_at(),
        };
        publish_committed(
            self.event_publisher.as_ref(),
            vec![envelope(&event, &metadata)],
        )
        .await;

        Ok(RecordOpinionResult {
            opinion: stored,
            event,
        })
    }

    async fn find_conclusion(
        &self,
        id: &ConclusionId,
    ) -> Result<Conclusion, CouncilError> {
        self.conclusions
            .find_by_id(id)
            .await?
            .ok_or_else(|| CouncilError::not_found("Conclusion", id))
    }
}
