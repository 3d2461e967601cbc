//! WithdrawResolutionHandler - Command handler for withdrawing a pending motion.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::CouncilLocks;
use crate::domain::council::CouncilError;
use crate::domain::foundation::{CommandMetadata, EventId, MotionId, Timestamp};
use crate::domain::resolution::{MotionWithdrawn, ResolutionMotion};
use crate::ports::{CouncilRepository, EventPublisher, MotionRepository};

use super::super::support::{envelope, load_council, publish_committed};
use super::load_motion;

#[derive(Debug, Clone)]
pub struct WithdrawResolutionCommand {
    pub motion_id: MotionId,
}

#[derive(Debug, Clone)]
pub struct WithdrawResolutionResult {
    pub motion: ResolutionMotion,
    pub event: MotionWithdrawn,
}

pub struct WithdrawResolutionHandler {
    councils: Arc<dyn CouncilRepository>,
    motions: Arc<dyn MotionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<CouncilLocks>,
}

impl WithdrawResolutionHandler {
    pub fn new(
        councils: Arc<dyn CouncilRepository>,
        motions: Arc<dyn MotionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        locks: Arc<CouncilLocks>,
    ) -> Self {
        Self {
            councils,
            motions,
            event_publisher,
            locks,
        }
    }

    /// Marks the motion failed, which frees the council for another motion.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the caller did not propose the motion
    /// - `InvalidState` if the motion is not pending or the council terminated
    pub async fn handle(
        &self,
        cmd: WithdrawResolutionCommand,
        metadata: CommandMetadata,
    ) -> Result<WithdrawResolutionResult, CouncilError> {
        let council_id = *load_motion(self.motions.as_ref(), &cmd.motion_id)
            .await?
            .council_id();
        let guard = self.locks.acquire(&council_id).await;

        let mut motion = load_motion(self.motions.as_ref(), &cmd.motion_id).await?;
        let council = load_council(self.councils.as_ref(), &council_id).await?;
        council.ensure_active()?;

        let at = Timestamp::now();
        if let Err(e) = motion.withdraw(&metadata.actor, at) {
            warn!(motion_id = %motion.id(), actor = %metadata.actor, error = %e, "withdraw rejected");
            return Err(e.into());
        }
        self.motions.update(&motion).await?;
        drop(guard);

        info!(council_id = %council_id, motion_id = %motion.id(), "motion withdrawn");

        let event = MotionWithdrawn {
            event_id: EventId::new(),
            motion_id: *motion.id(),
            council_id,
            withdrawn_by: metadata.actor.clone(),
            withdrawn_at: at,
        };
        publish_committed(
            self.event_publisher.as_ref(),
            vec![envelope(&event, &metadata)],
        )
        .await;

        Ok(WithdrawResolutionResult { motion, event })
    }
}
