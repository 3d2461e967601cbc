//! Conclusion entity: a proposed statement, possibly amending another.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    require_min_chars, ConclusionId, CouncilId, DomainError, ErrorCode, Timestamp, Username,
};

/// Minimum trimmed length of conclusion text.
pub const MIN_CONCLUSION_LENGTH: usize = 5;

/// A proposed conclusion.
///
/// # Invariants
///
/// - `text` is at least 5 characters, stored trimmed
/// - `is_amendment` iff `replaces_id` is set
/// - `replaced_by_id` is set iff the conclusion was superseded, which also
///   makes it inactive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conclusion {
    id: ConclusionId,
    council_id: CouncilId,
    text: String,
    proposed_by: Username,
    proposed_at: Timestamp,
    is_amendment: bool,
    replaces_id: Option<ConclusionId>,
    replaced_by_id: Option<ConclusionId>,
    is_active: bool,
}

impl Conclusion {
    /// Proposes a fresh conclusion.
    pub fn propose(
        id: ConclusionId,
        council_id: CouncilId,
        text: &str,
        proposed_by: Username,
    ) -> Result<Self, DomainError> {
        require_min_chars("text", text, MIN_CONCLUSION_LENGTH)?;

        Ok(Self {
            id,
            council_id,
            text: text.trim().to_string(),
            proposed_by,
            proposed_at: Timestamp::now(),
            is_amendment: false,
            replaces_id: None,
            replaced_by_id: None,
            is_active: true,
        })
    }

    /// Proposes an amendment to `original`.
    ///
    /// # Errors
    ///
    /// - `ConclusionNotFound` if `original` belongs to another council
    /// - `ConclusionInactive` if `original` was already superseded
    /// - `TooShort` / `EmptyField` for short text
    pub fn amend(
        id: ConclusionId,
        original: &Conclusion,
        text: &str,
        proposed_by: Username,
    ) -> Result<Self, DomainError> {
        let mut amendment = Self::propose(id, original.council_id, text, proposed_by)?;
        original.ensure_active()?;
        amendment.is_amendment = true;
        amendment.replaces_id = Some(original.id);
        Ok(amendment)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ConclusionId,
        council_id: CouncilId,
        text: String,
        proposed_by: Username,
        proposed_at: Timestamp,
        replaces_id: Option<ConclusionId>,
        replaced_by_id: Option<ConclusionId>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            council_id,
            text,
            proposed_by,
            proposed_at,
            is_amendment: replaces_id.is_some(),
            replaces_id,
            replaced_by_id,
            is_active,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ConclusionId {
        &self.id
    }

    pub fn council_id(&self) -> &CouncilId {
        &self.council_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn proposed_by(&self) -> &Username {
        &self.proposed_by
    }

    pub fn proposed_at(&self) -> &Timestamp {
        &self.proposed_at
    }

    pub fn is_amendment(&self) -> bool {
        self.is_amendment
    }

    /// The conclusion this one amends.
    pub fn replaces_id(&self) -> Option<&ConclusionId> {
        self.replaces_id.as_ref()
    }

    /// The amendment that superseded this conclusion.
    pub fn replaced_by_id(&self) -> Option<&ConclusionId> {
        self.replaced_by_id.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Fails with `ConclusionInactive` for superseded conclusions.
    pub fn ensure_active(&self) -> Result<(), DomainError> {
        if self.is_active {
            Ok(())
        } else {
            Err(
                DomainError::new(ErrorCode::ConclusionInactive, "Conclusion was superseded")
                    .with_detail("id", self.id.to_string()),
            )
        }
    }

    /// Marks this conclusion as superseded by `amendment`.
    pub fn supersede_by(&mut self, amendment: ConclusionId) -> Result<(), DomainError> {
        self.ensure_active()?;
        self.is_active = false;
        self.replaced_by_id = Some(amendment);
        Ok(())
    }

    /// Display ordering: oldest first, ties broken by id.
    pub fn chronological(a: &Conclusion, b: &Conclusion) -> std::cmp::Ordering {
        a.proposed_at
            .cmp(&b.proposed_at)
            .then_with(|| a.id.cmp(&b.id))
    }
}
