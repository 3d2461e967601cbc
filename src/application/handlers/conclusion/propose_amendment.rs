//! ProposeAmendmentHandler - Command handler for amending a conclusion.

use std::sync::Arc;

use tracing::info;

use crate::application::CouncilLocks;
use crate::config::EngineConfig;
use crate::domain::conclusion::Conclusion;
use crate::domain::council::CouncilError;
use crate::domain::foundation::{CommandMetadata, ConclusionId, CouncilId};
use crate::ports::{ConclusionRepository, CouncilRepository, EventPublisher, MemberRepository};

use super::super::support::{envelope, load_council, publish_committed, require_accepted};
use super::propose_conclusion::{ensure_capacity, proposed_event, ProposeConclusionResult};

#[derive(Debug, Clone)]
pub struct ProposeAmendmentCommand {
    pub council_id: CouncilId,
    pub original_id: ConclusionId,
    pub text: String,
}

pub struct ProposeAmendmentHandler {
    councils: Arc<dyn CouncilRepository>,
    members: Arc<dyn MemberRepository>,
    conclusions: Arc<dyn ConclusionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<CouncilLocks>,
    config: EngineConfig,
}

impl ProposeAmendmentHandler {
    pub fn new(
        councils: Arc<dyn CouncilRepository>,
        members: Arc<dyn MemberRepository>,
        conclusions: Arc<dyn ConclusionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        locks: Arc<CouncilLocks>,
        config: EngineConfig,
    ) -> Self {
        Self {
            councils,
            members,
            conclusions,
            event_publisher,
            locks,
            config,
        }
    }

    /// # Errors
    ///
    /// - `NotFound` if the original is missing or belongs to another council
    /// - `InvalidState` if the original was already superseded
    pub async fn handle(
        &self,
        cmd: ProposeAmendmentCommand,
        metadata: CommandMetadata,
    ) -> Result<ProposeConclusionResult, CouncilError> {
        let guard = self.locks.acquire(&cmd.council_id).await;

        let council = load_council(self.councils.as_ref(), &cmd.council_id).await?;
        require_accepted(self.members.as_ref(), council.id(), &metadata.actor).await?;
        council.ensure_active()?;
        ensure_capacity(self.conclusions.as_ref(), council.id(), &self.config).await?;

        let original = self
            .conclusions
            .find_by_id(&cmd.original_id)
            .await?
            .filter(|c| c.council_id() == council.id())
            .ok_or_else(|| CouncilError::not_found("Conclusion", cmd.original_id))?;

        let amendment = Conclusion::amend(
            ConclusionId::new(),
            &original,
            &cmd.text,
            metadata.actor.clone(),
        )?;
        self.conclusions.save(&amendment).await?;
        drop(guard);

        info!(
            council_id = %council.id(),
            conclusion_id = %amendment.id(),
            replaces_id = %original.id(),
            "amendment proposed"
        );

        let event = proposed_event(&amendment);
        publish_committed(
            self.event_publisher.as_ref(),
            vec![envelope(&event, &metadata)],
        )
        .await;

        Ok(ProposeConclusionResult {
            conclusion: amendment,
            event,
        })
    }
}
