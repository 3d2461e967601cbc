//! Statement events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, CouncilId, EventId, MotionKind, Timestamp};

/// Published once the final statement is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementGenerated {
    pub event_id: EventId,
    pub council_id: CouncilId,
    pub kind: MotionKind,
    pub text: String,
    pub generated_at: Timestamp,
}

domain_event!(
    StatementGenerated,
    event_type = "statement.generated.v1",
    schema_version = 1,
    aggregate_id = council_id,
    aggregate_type = "Council",
    occurred_at = generated_at,
    event_id = event_id
);
