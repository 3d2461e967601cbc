//! Resolution motion events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, CouncilId, EventId, MotionId, MotionKind, Stance, Timestamp, Username,
};

// ════════════════════════════════════════════════════════════════════════════
// MotionProposed
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionProposed {
    pub event_id: EventId,
    pub motion_id: MotionId,
    pub council_id: CouncilId,
    pub kind: MotionKind,
    pub proposed_by: Username,
    pub proposed_at: Timestamp,
}

domain_event!(
    MotionProposed,
    event_type = "motion.proposed.v1",
    schema_version = 1,
    aggregate_id = motion_id,
    aggregate_type = "Motion",
    occurred_at = proposed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// VoteCast
// ════════════════════════════════════════════════════════════════════════════

/// Published on every vote upsert, before the threshold outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteCast {
    pub event_id: EventId,
    pub motion_id: MotionId,
    pub council_id: CouncilId,
    pub voter: Username,
    pub stance: Stance,
    pub previous: Option<Stance>,
    pub support_count: usize,
    pub accepted_count: usize,
    pub cast_at: Timestamp,
}

domain_event!(
    VoteCast,
    event_type = "vote.cast.v1",
    schema_version = 1,
    aggregate_id = motion_id,
    aggregate_type = "Motion",
    occurred_at = cast_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// MotionPassed / MotionWithdrawn
// ════════════════════════════════════════════════════════════════════════════

/// Published exactly once per council.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionPassed {
    pub event_id: EventId,
    pub motion_id: MotionId,
    pub council_id: CouncilId,
    pub kind: MotionKind,
    pub support_count: usize,
    pub accepted_count: usize,
    pub passed_at: Timestamp,
}

domain_event!(
    MotionPassed,
    event_type = "motion.passed.v1",
    schema_version = 1,
    aggregate_id = motion_id,
    aggregate_type = "Motion",
    occurred_at = passed_at,
    event_id = event_id
);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionWithdrawn {
    pub event_id: EventId,
    pub motion_id: MotionId,
    pub council_id: CouncilId,
    pub withdrawn_by: Username,
    pub withdrawn_at: Timestamp,
}

domain_event!(
    MotionWithdrawn,
    event_type = "motion.withdrawn.v1",
    schema_version = 1,
    aggregate_id = motion_id,
    aggregate_type = "Motion",
    occurred_at = withdrawn_at,
    event_id = event_id
);
