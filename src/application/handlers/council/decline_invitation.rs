//! DeclineInvitationHandler - Command handler for declining or leaving a council.

use std::sync::Arc;

use tracing::info;

use crate::application::CouncilLocks;
use crate::domain::council::{CouncilError, InvitationDeclined};
use crate::domain::foundation::{CommandMetadata, CouncilId, EventId, Timestamp};
use crate::ports::{CouncilRepository, EventPublisher, MemberRepository};

use super::super::support::{envelope, load_council, publish_committed};
use super::InvitationResult;

#[derive(Debug, Clone)]
pub struct DeclineInvitationCommand {
    pub council_id: CouncilId,
}

pub struct DeclineInvitationHandler {
    councils: Arc<dyn CouncilRepository>,
    members: Arc<dyn MemberRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<CouncilLocks>,
}

impl DeclineInvitationHandler {
    pub fn new(
        councils: Arc<dyn CouncilRepository>,
        members: Arc<dyn MemberRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        locks: Arc<CouncilLocks>,
    ) -> Self {
        Self {
            councils,
            members,
            event_publisher,
            locks,
        }
    }

    /// An accepted member may decline later; their opinions and votes then
    /// stop counting.
    ///
    /// A pending motion is not re-evaluated here. If the smaller quorum is
    /// already met, the motion carries on the next vote cast.
    pub async fn handle(
        &self,
        cmd: DeclineInvitationCommand,
        metadata: CommandMetadata,
    ) -> Result<InvitationResult, CouncilError> {
        let guard = self.locks.acquire(&cmd.council_id).await;

        let council = load_council(self.councils.as_ref(), &cmd.council_id).await?;
        let mut member = self
            .members
            .find(council.id(), &metadata.actor)
            .await?
            .ok_or_else(|| CouncilError::not_found("Member", &metadata.actor))?;
        council.ensure_active()?;

        if !member.decline() {
            return Ok(InvitationResult {
                member,
                changed: false,
            });
        }
        self.members.update(&member).await?;
        drop(guard);

        info!(council_id = %council.id(), username = %metadata.actor, "invitation declined");

        let event = InvitationDeclined {
            event_id: EventId::new(),
            council_id: *council.id(),
            username: metadata.actor.clone(),
            declined_at: Timestamp::now(),
        };
        publish_committed(
            self.event_publisher.as_ref(),
            vec![envelope(&event, &metadata)],
        )
        .await;

        Ok(InvitationResult {
            member,
            changed: true,
        })
    }
}
