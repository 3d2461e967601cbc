//! Conclusion domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, ConclusionId, CouncilId, EventId, OpinionId, Stance, Timestamp, Username,
};

/// Published when a conclusion or amendment is proposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConclusionProposed {
    pub event_id: EventId,
    pub conclusion_id: ConclusionId,
    pub council_id: CouncilId,
    pub proposed_by: Username,
    pub text: String,
    /// Set for amendments.
    pub replaces_id: Option<ConclusionId>,
    pub proposed_at: Timestamp,
}

domain_event!(
    ConclusionProposed,
    event_type = "conclusion.proposed.v1",
    schema_version = 1,
    aggregate_id = conclusion_id,
    aggregate_type = "Conclusion",
    occurred_at = proposed_at,
    event_id = event_id
);

/// Published on every opinion upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpinionRecorded {
    pub event_id: EventId,
    pub opinion_id: OpinionId,
    pub conclusion_id: ConclusionId,
    pub council_id: CouncilId,
    pub author: Username,
    pub stance: Stance,
    /// True when an earlier opinion by the same author was overwritten.
    pub was_update: bool,
    pub recorded_at: Timestamp,
}

domain_event!(
    OpinionRecorded,
    event_type = "opinion.recorded.v1",
    schema_version = 1,
    aggregate_id = conclusion_id,
    aggregate_type = "Conclusion",
    occurred_at = recorded_at,
    event_id = event_id
);

/// Published when an amendment replaces its original at resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConclusionSuperseded {
    pub event_id: EventId,
    pub conclusion_id: ConclusionId,
    pub replaced_by_id: ConclusionId,
    pub council_id: CouncilId,
    pub superseded_at: Timestamp,
}

domain_event!(
    ConclusionSuperseded,
    event_type = "conclusion.superseded.v1",
    schema_version = 1,
    aggregate_id = conclusion_id,
    aggregate_type = "Conclusion",
    occurred_at = superseded_at,
    event_id = event_id
);
