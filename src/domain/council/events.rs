//! Council domain events.
//!
//! - `CouncilCreated` - Council convened
//! - `MembersInvited` - New invitees recorded
//! - `InvitationAccepted` - Member joined
//! - `InvitationDeclined` - Member declined or left
//! - `CouncilTerminated` - Council resolved or closed by a passed motion

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, CouncilId, CouncilStatus, EventId, MotionId, Timestamp, Username,
};

// ════════════════════════════════════════════════════════════════════════════
// CouncilCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a council is convened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouncilCreated {
    pub event_id: EventId,
    pub council_id: CouncilId,
    pub convener: Username,
    pub issue: String,
    /// Usernames recorded as invited (convener and duplicates excluded).
    pub invited: Vec<Username>,
    pub created_at: Timestamp,
}

domain_event!(
    CouncilCreated,
    event_type = "council.created.v1",
    schema_version = 1,
    aggregate_id = council_id,
    aggregate_type = "Council",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// MembersInvited
// ════════════════════════════════════════════════════════════════════════════

/// Published when an accepted member invites new usernames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembersInvited {
    pub event_id: EventId,
    pub council_id: CouncilId,
    pub invited_by: Username,
    pub invited: Vec<Username>,
    pub invited_at: Timestamp,
}

domain_event!(
    MembersInvited,
    event_type = "council.members_invited.v1",
    schema_version = 1,
    aggregate_id = council_id,
    aggregate_type = "Council",
    occurred_at = invited_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// InvitationAccepted / InvitationDeclined
// ════════════════════════════════════════════════════════════════════════════

/// Published when a member accepts (only on an actual status change).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationAccepted {
    pub event_id: EventId,
    pub council_id: CouncilId,
    pub username: Username,
    pub accepted_at: Timestamp,
}

domain_event!(
    InvitationAccepted,
    event_type = "council.invitation_accepted.v1",
    schema_version = 1,
    aggregate_id = council_id,
    aggregate_type = "Council",
    occurred_at = accepted_at,
    event_id = event_id
);

/// Published when a member declines or leaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationDeclined {
    pub event_id: EventId,
    pub council_id: CouncilId,
    pub username: Username,
    pub declined_at: Timestamp,
}

domain_event!(
    InvitationDeclined,
    event_type = "council.invitation_declined.v1",
    schema_version = 1,
    aggregate_id = council_id,
    aggregate_type = "Council",
    occurred_at = declined_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// CouncilTerminated
// ════════════════════════════════════════════════════════════════════════════

/// Published once per council, when a motion passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouncilTerminated {
    pub event_id: EventId,
    pub council_id: CouncilId,
    pub motion_id: MotionId,
    pub status: CouncilStatus,
    pub resolved_at: Timestamp,
}

domain_event!(
    CouncilTerminated,
    event_type = "council.terminated.v1",
    schema_version = 1,
    aggregate_id = council_id,
    aggregate_type = "Council",
    occurred_at = resolved_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    #[test]
    fn council_created_envelope_carries_invitees() {
        let event = CouncilCreated {
            event_id: EventId::new(),
            council_id: CouncilId::new(),
            convener: Username::new("alice").unwrap(),
            issue: "Where should the library go?".into(),
            invited: vec![Username::new("bob_1").unwrap()],
            created_at: Timestamp::now(),
        };

        let envelope = event.to_envelope().unwrap();
        assert_eq!(envelope.event_type, "council.created.v1");
        assert_eq!(envelope.aggregate_id, event.council_id.to_string());
        assert_eq!(envelope.payload["invited"][0], "bob_1");
    }

    #[test]
    fn council_terminated_reports_status() {
        let event = CouncilTerminated {
            event_id: EventId::new(),
            council_id: CouncilId::new(),
            motion_id: MotionId::new(),
            status: CouncilStatus::Resolved,
            resolved_at: Timestamp::now(),
        };
        assert_eq!(event.aggregate_type(), "Council");
        assert_eq!(event.to_envelope().unwrap().payload["status"], "resolved");
    }
}
