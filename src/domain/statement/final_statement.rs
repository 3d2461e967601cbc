//! FinalStatement value: the derived, immutable outcome of a council.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CouncilId, MotionKind, Timestamp};

/// Produced exactly once, when a motion passes. Never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalStatement {
    council_id: CouncilId,
    kind: MotionKind,
    text: String,
    generated_at: Timestamp,
}

impl FinalStatement {
    pub fn new(council_id: CouncilId, kind: MotionKind, text: String, generated_at: Timestamp) -> Self {
        Self {
            council_id,
            kind,
            text,
            generated_at,
        }
    }

    pub fn council_id(&self) -> &CouncilId {
        &self.council_id
    }

    /// Mirrors the kind of the motion that passed.
    pub fn kind(&self) -> MotionKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn generated_at(&self) -> &Timestamp {
        &self.generated_at
    }
}
