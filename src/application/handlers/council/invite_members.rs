//! InviteMembersHandler - Command handler for adding invitees to a council.

use std::sync::Arc;

use tracing::info;

use crate::application::CouncilLocks;
use crate::config::EngineConfig;
use crate::domain::council::{CouncilError, Member, MembersInvited};
use crate::domain::foundation::{CommandMetadata, CouncilId, EventId, Timestamp, Username};
use crate::ports::{CouncilRepository, EventPublisher, MemberRepository};

use super::super::support::{envelope, load_council, publish_committed, require_accepted};

/// Invite more users into an active council.
#[derive(Debug, Clone)]
pub struct InviteMembersCommand {
    pub council_id: CouncilId,
    pub usernames: Vec<Username>,
}

#[derive(Debug, Clone)]
pub struct InviteMembersResult {
    /// Newly created rows. Names that already had a row are skipped.
    pub added: Vec<Member>,
    /// `None` when nobody new was invited.
    pub event: Option<MembersInvited>,
}

pub struct InviteMembersHandler {
    councils: Arc<dyn CouncilRepository>,
    members: Arc<dyn MemberRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<CouncilLocks>,
    config: EngineConfig,
}

impl InviteMembersHandler {
    pub fn new(
        councils: Arc<dyn CouncilRepository>,
        members: Arc<dyn MemberRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        locks: Arc<CouncilLocks>,
        config: EngineConfig,
    ) -> Self {
        Self {
            councils,
            members,
            event_publisher,
            locks,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: InviteMembersCommand,
        metadata: CommandMetadata,
    ) -> Result<InviteMembersResult, CouncilError> {
        let guard = self.locks.acquire(&cmd.council_id).await;

        let council = load_council(self.councils.as_ref(), &cmd.council_id).await?;
        require_accepted(self.members.as_ref(), council.id(), &metadata.actor).await?;
        council.ensure_active()?;

        let existing = self.members.list_by_council(council.id()).await?;
        let mut fresh: Vec<Username> = Vec::new();
        for username in cmd.usernames {
            let known = existing.iter().any(|m| m.username() == &username);
            if !known && !fresh.contains(&username) {
                fresh.push(username);
            }
        }
        if existing.len() + fresh.len() > self.config.max_members_per_council {
            return Err(CouncilError::validation(
                "usernames",
                format!(
                    "a council holds at most {} members",
                    self.config.max_members_per_council
                ),
            ));
        }

        let at = Timestamp::now();
        let mut added = Vec::with_capacity(fresh.len());
        for username in fresh {
            let member = Member::invited(*council.id(), username, at);
            if self.members.insert_if_absent(&member).await? {
                added.push(member);
            }
        }
        drop(guard);

        if added.is_empty() {
            return Ok(InviteMembersResult { added, event: None });
        }

        info!(council_id = %council.id(), invited = added.len(), "members invited");

        let event = MembersInvited {
            event_id: EventId::new(),
            council_id: *council.id(),
            invited_by: metadata.actor.clone(),
            invited: added.iter().map(|m| m.username().clone()).collect(),
            invited_at: at,
        };
        publish_committed(
            self.event_publisher.as_ref(),
            vec![envelope(&event, &metadata)],
        )
        .await;

        Ok(InviteMembersResult {
            added,
            event: Some(event),
        })
    }
}
