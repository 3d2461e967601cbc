//! ProposeConclusionHandler - Command handler for adding a conclusion.

use std::sync::Arc;

use tracing::info;

use crate::application::CouncilLocks;
use crate::config::EngineConfig;
use crate::domain::conclusion::{Conclusion, ConclusionProposed};
use crate::domain::council::CouncilError;
use crate::domain::foundation::{CommandMetadata, ConclusionId, CouncilId, EventId};
use crate::ports::{ConclusionRepository, CouncilRepository, EventPublisher, MemberRepository};

use super::super::support::{envelope, load_council, publish_committed, require_accepted};

#[derive(Debug, Clone)]
pub struct ProposeConclusionCommand {
    pub council_id: CouncilId,
    pub text: String,
}

/// Result shared by conclusion and amendment proposals.
#[derive(Debug, Clone)]
pub struct ProposeConclusionResult {
    pub conclusion: Conclusion,
    pub event: ConclusionProposed,
}

pub struct ProposeConclusionHandler {
    councils: Arc<dyn CouncilRepository>,
    members: Arc<dyn MemberRepository>,
    conclusions: Arc<dyn ConclusionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<CouncilLocks>,
    config: EngineConfig,
}

impl ProposeConclusionHandler {
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

    pub async fn handle(
        &self,
        cmd: ProposeConclusionCommand,
        metadata: CommandMetadata,
    ) -> Result<ProposeConclusionResult, CouncilError> {
        let guard = self.locks.acquire(&cmd.council_id).await;

        let council = load_council(self.councils.as_ref(), &cmd.council_id).await?;
        require_accepted(self.members.as_ref(), council.id(), &metadata.actor).await?;
        council.ensure_active()?;
        ensure_capacity(self.conclusions.as_ref(), council.id(), &self.config).await?;

        let conclusion = Conclusion::propose(
            ConclusionId::new(),
            *council.id(),
            &cmd.text,
            metadata.actor.clone(),
        )?;
        self.conclusions.save(&conclusion).await?;
        drop(guard);

        info!(
            council_id = %council.id(),
            conclusion_id = %conclusion.id(),
            proposed_by = %metadata.actor,
            "conclusion proposed"
        );

        let event = proposed_event(&conclusion);
        publish_committed(
            self.event_publisher.as_ref(),
            vec![envelope(&event, &metadata)],
        )
        .await;

        Ok(ProposeConclusionResult { conclusion, event })
    }
}

/// Fails once the council holds the configured number of conclusions.
pub(super) async fn ensure_capacity(
    conclusions: &dyn ConclusionRepository,
    council_id: &CouncilId,
    config: &EngineConfig,
) -> Result<(), CouncilError> {
    let count = conclusions.count_by_council(council_id).await?;
    if count >= config.max_conclusions_per_council {
        return Err(CouncilError::invalid_state(format!(
            "council already holds {} conclusions",
            count
        )));
    }
    Ok(())
}

pub(super) fn proposed_event(conclusion: &Conclusion) -> ConclusionProposed {
    ConclusionProposed {
        event_id: EventId::new(),
        conclusion_id: *conclusion.id(),
        council_id: *conclusion.council_id(),
        proposed_by: conclusion.proposed_by().clone(),
        text: conclusion.text().to_string(),
        replaces_id: conclusion.replaces_id().copied(),
        proposed_at: *conclusion.proposed_at(),
    }
}
