//! AcceptInvitationHandler - Command handler for joining a council.

use std::sync::Arc;

use tracing::info;

use crate::application::CouncilLocks;
use crate::domain::council::{CouncilError, InvitationAccepted, Member};
use crate::domain::foundation::{CommandMetadata, CouncilId, EventId, Timestamp};
use crate::ports::{CouncilRepository, EventPublisher, MemberRepository};

use super::super::support::{envelope, load_council, publish_committed};

#[derive(Debug, Clone)]
pub struct AcceptInvitationCommand {
    pub council_id: CouncilId,
}

/// Outcome shared by accept and decline.
#[derive(Debug, Clone)]
pub struct InvitationResult {
    pub member: Member,
    /// False when the member was already in the requested state.
    pub changed: bool,
}

pub struct AcceptInvitationHandler {
    councils: Arc<dyn CouncilRepository>,
    members: Arc<dyn MemberRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<CouncilLocks>,
}

impl AcceptInvitationHandler {
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

    /// Accepting twice is a no-op.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the council or the caller's member row is missing
    /// - `InvalidState` if the council is no longer active
    pub async fn handle(
        &self,
        cmd: AcceptInvitationCommand,
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

        let at = Timestamp::now();
        if !member.accept(at) {
            return Ok(InvitationResult {
                member,
                changed: false,
            });
        }
        self.members.update(&member).await?;
        drop(guard);

        info!(council_id = %council.id(), username = %metadata.actor, "invitation accepted");

        let event = InvitationAccepted {
            event_id: EventId::new(),
            council_id: *council.id(),
            username: metadata.actor.clone(),
            accepted_at: at,
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
