//! ProposeResolutionHandler - Command handler for opening a resolve/close motion.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::CouncilLocks;
use crate::domain::council::CouncilError;
use crate::domain::foundation::{CommandMetadata, CouncilId, EventId, MotionId, MotionKind};
use crate::domain::resolution::{MotionProposed, ResolutionMotion};
use crate::ports::{CouncilRepository, EventPublisher, MemberRepository, MotionRepository};

use super::super::support::{envelope, load_council, publish_committed, require_accepted};

#[derive(Debug, Clone)]
pub struct ProposeResolutionCommand {
    pub council_id: CouncilId,
    pub kind: MotionKind,
}

#[derive(Debug, Clone)]
pub struct ProposeResolutionResult {
    pub motion: ResolutionMotion,
    pub event: MotionProposed,
}

pub struct ProposeResolutionHandler {
    councils: Arc<dyn CouncilRepository>,
    members: Arc<dyn MemberRepository>,
    motions: Arc<dyn MotionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<CouncilLocks>,
}

impl ProposeResolutionHandler {
    pub fn new(
        councils: Arc<dyn CouncilRepository>,
        members: Arc<dyn MemberRepository>,
        motions: Arc<dyn MotionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        locks: Arc<CouncilLocks>,
    ) -> Self {
        Self {
            councils,
            members,
            motions,
            event_publisher,
            locks,
        }
    }

    /// # Errors
    ///
    /// - `InvalidState` if the council is not active or a motion is already pending
    pub async fn handle(
        &self,
        cmd: ProposeResolutionCommand,
        metadata: CommandMetadata,
    ) -> Result<ProposeResolutionResult, CouncilError> {
        let guard = self.locks.acquire(&cmd.council_id).await;

        let council = load_council(self.councils.as_ref(), &cmd.council_id).await?;
        require_accepted(self.members.as_ref(), council.id(), &metadata.actor).await?;
        council.ensure_active()?;

        if let Some(pending) = self.motions.find_pending(council.id()).await? {
            warn!(
                council_id = %council.id(),
                pending_motion = %pending.id(),
                "rejected: a motion is already pending"
            );
            return Err(CouncilError::invalid_state(format!(
                "motion {} is already pending",
                pending.id()
            )));
        }

        let motion = ResolutionMotion::propose(
            MotionId::new(),
            *council.id(),
            cmd.kind,
            metadata.actor.clone(),
        );
        self.motions.save(&motion).await?;
        drop(guard);

        info!(
            council_id = %council.id(),
            motion_id = %motion.id(),
            kind = %motion.kind(),
            "motion proposed"
        );

        let event = MotionProposed {
            event_id: EventId::new(),
            motion_id: *motion.id(),
            council_id: *motion.council_id(),
            kind: motion.kind(),
            proposed_by: motion.proposed_by().clone(),
            proposed_at: *motion.proposed_at(),
        };
        publish_committed(
            self.event_publisher.as_ref(),
            vec![envelope(&event, &metadata)],
        )
        .await;

        Ok(ProposeResolutionResult { motion, event })
    }
}
