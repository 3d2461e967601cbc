//! CreateCouncilHandler - Command handler for convening a council.

use std::sync::Arc;

use tracing::info;

use crate::config::EngineConfig;
use crate::domain::council::{Council, CouncilCreated, CouncilError, Member};
use crate::domain::foundation::{
    parse_usernames, CommandMetadata, CouncilId, EventId, Username,
};
use crate::ports::{CouncilRepository, EventPublisher, MemberRepository};

use super::super::support::{envelope, publish_committed};

/// Command to convene a council. The convener is the caller.
#[derive(Debug, Clone)]
pub struct CreateCouncilCommand {
    pub issue: String,
    pub invitees: Vec<Username>,
}

impl CreateCouncilCommand {
    /// Builds the command from free-form invitee text (comma or newline separated).
    pub fn parse(issue: impl Into<String>, invitees: &str) -> Result<Self, CouncilError> {
        Ok(Self {
            issue: issue.into(),
            invitees: parse_usernames(invitees)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateCouncilResult {
    pub council: Council,
    /// Convener first, then invitees in the order given.
    pub members: Vec<Member>,
    pub event: CouncilCreated,
}

pub struct CreateCouncilHandler {
    councils: Arc<dyn CouncilRepository>,
    members: Arc<dyn MemberRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    config: EngineConfig,
}

impl CreateCouncilHandler {
    pub fn new(
        councils: Arc<dyn CouncilRepository>,
        members: Arc<dyn MemberRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        config: EngineConfig,
    ) -> Self {
        Self {
            councils,
            members,
            event_publisher,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateCouncilCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateCouncilResult, CouncilError> {
        let convener = metadata.actor.clone();

        // 1. Distinct invitees, convener excluded
        let mut invitees: Vec<Username> = Vec::with_capacity(cmd.invitees.len());
        for username in cmd.invitees {
            if username != convener && !invitees.contains(&username) {
                invitees.push(username);
            }
        }
        if invitees.len() + 1 > self.config.max_members_per_council {
            return Err(CouncilError::validation(
                "invitees",
                format!(
                    "a council holds at most {} members",
                    self.config.max_members_per_council
                ),
            ));
        }

        // 2. Create aggregate and membership rows
        let council = Council::new(CouncilId::new(), &cmd.issue, convener.clone())?;
        self.councils.save(&council).await?;

        let at = *council.created_at();
        let mut members = vec![Member::convener(*council.id(), convener.clone(), at)];
        members.extend(
            invitees
                .iter()
                .map(|u| Member::invited(*council.id(), u.clone(), at)),
        );
        for member in &members {
            self.members.insert_if_absent(member).await?;
        }

        info!(
            council_id = %council.id(),
            %convener,
            invited = invitees.len(),
            "council convened"
        );

        // 3. Publish
        let event = CouncilCreated {
            event_id: EventId::new(),
            council_id: *council.id(),
            convener,
            issue: council.issue().to_string(),
            invited: invitees,
            created_at: at,
        };
        publish_committed(
            self.event_publisher.as_ref(),
            vec![envelope(&event, &metadata)],
        )
        .await;

        Ok(CreateCouncilResult {
            council,
            members,
            event,
        })
    }
}
