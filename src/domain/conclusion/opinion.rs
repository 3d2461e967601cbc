//! Opinion entity: one member's stance on one conclusion.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    require_min_chars, ConclusionId, DomainError, OpinionId, Stance, Timestamp, Username,
};

/// Minimum trimmed length of opinion reasoning.
pub const MIN_REASONING_LENGTH: usize = 10;

/// A member's reasoned stance on a conclusion.
///
/// Keyed by (conclusion, author); a later submission revises stance and
/// reasoning in place and keeps `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opinion {
    id: OpinionId,
    conclusion_id: ConclusionId,
    author: Username,
    stance: Stance,
    reasoning: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Opinion {
    pub fn new(
        conclusion_id: ConclusionId,
        author: Username,
        stance: Stance,
        reasoning: &str,
    ) -> Result<Self, DomainError> {
        require_min_chars("reasoning", reasoning, MIN_REASONING_LENGTH)?;

        let now = Timestamp::now();
        Ok(Self {
            id: OpinionId::new(),
            conclusion_id,
            author,
            stance,
            reasoning: reasoning.trim().to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn reconstitute(
        id: OpinionId,
        conclusion_id: ConclusionId,
        author: Username,
        stance: Stance,
        reasoning: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            conclusion_id,
            author,
            stance,
            reasoning,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &OpinionId {
        &self.id
    }

    pub fn conclusion_id(&self) -> &ConclusionId {
        &self.conclusion_id
    }

    pub fn author(&self) -> &Username {
        &self.author
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Overwrites stance and reasoning with those of a newer submission.
    pub fn revise_from(&mut self, newer: &Opinion) {
        self.stance = newer.stance;
        self.reasoning = newer.reasoning.clone();
        self.updated_at = newer.updated_at;
    }
}
