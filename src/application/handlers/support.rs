//! Shared guards and event plumbing for council handlers.

use tracing::warn;

use crate::domain::council::{Council, CouncilError, Member};
use crate::domain::foundation::{
    CommandMetadata, CouncilId, EventEnvelope, SerializableDomainEvent, Username,
};
use crate::ports::{CouncilRepository, EventPublisher, MemberRepository};

/// Loads a council or fails with `NotFound`.
pub(crate) async fn load_council(
    councils: &dyn CouncilRepository,
    council_id: &CouncilId,
) -> Result<Council, CouncilError> {
    councils
        .find_by_id(council_id)
        .await?
        .ok_or_else(|| CouncilError::not_found("Council", council_id))
}

/// Loads the caller's member row, any status, or fails with `Unauthorized`.
pub(crate) async fn require_member(
    members: &dyn MemberRepository,
    council_id: &CouncilId,
    username: &Username,
) -> Result<Member, CouncilError> {
    members.find(council_id, username).await?.ok_or_else(|| {
        CouncilError::unauthorized(format!("{} is not a member of this council", username))
    })
}

/// Loads the caller's member row and requires it to be accepted.
pub(crate) async fn require_accepted(
    members: &dyn MemberRepository,
    council_id: &CouncilId,
    username: &Username,
) -> Result<Member, CouncilError> {
    let member = members.find(council_id, username).await?;
    match member {
        Some(member) if member.is_accepted() => Ok(member),
        _ => {
            warn!(%council_id, %username, "rejected: not an accepted member");
            Err(CouncilError::unauthorized(format!(
                "{} is not an accepted member of this council",
                username
            )))
        }
    }
}

/// Wraps an event with the caller's correlation context.
///
/// Serialization failures are logged and the event dropped; state has
/// already been committed by the time events are built.
pub(crate) fn envelope<E: SerializableDomainEvent>(
    event: &E,
    metadata: &CommandMetadata,
) -> Option<EventEnvelope> {
    match event.to_envelope() {
        Ok(envelope) => Some(envelope.with_command_metadata(metadata)),
        Err(e) => {
            warn!(event_type = event.event_type(), error = %e, "event not serializable");
            None
        }
    }
}

/// Publishes events for a committed change. Failures are logged, not returned.
pub(crate) async fn publish_committed(
    publisher: &dyn EventPublisher,
    envelopes: Vec<Option<EventEnvelope>>,
) {
    let envelopes: Vec<EventEnvelope> = envelopes.into_iter().flatten().collect();
    if envelopes.is_empty() {
        return;
    }
    if let Err(e) = publisher.publish_all(envelopes).await {
        warn!(error = %e, "publishing committed council events failed");
    }
}
