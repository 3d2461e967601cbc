//! Council aggregate entity.
//!
//! A council is the container for one deliberation. It owns its members,
//! conclusions, opinions and motions by id; none of them outlive it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    require_min_chars, CouncilId, CouncilStatus, DomainError, ErrorCode, MotionKind,
    StateMachine, Timestamp, Username,
};

/// Minimum trimmed length of the issue under deliberation.
pub const MIN_ISSUE_LENGTH: usize = 10;

/// Council aggregate.
///
/// # Invariants
///
/// - `issue` is at least 10 characters once trimmed, stored trimmed
/// - `resolved_at` is set iff `status` is not `Active`
/// - exactly one terminal transition happens per council
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Council {
    id: CouncilId,
    issue: String,
    convener: Username,
    status: CouncilStatus,
    created_at: Timestamp,
    resolved_at: Option<Timestamp>,
}

impl Council {
    /// Convenes a new active council.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooShort` if the issue is under 10 characters
    pub fn new(id: CouncilId, issue: &str, convener: Username) -> Result<Self, DomainError> {
        require_min_chars("issue", issue, MIN_ISSUE_LENGTH)?;

        Ok(Self {
            id,
            issue: issue.trim().to_string(),
            convener,
            status: CouncilStatus::Active,
            created_at: Timestamp::now(),
            resolved_at: None,
        })
    }

    /// Reconstitute a council from persistence (no validation).
    pub fn reconstitute(
        id: CouncilId,
        issue: String,
        convener: Username,
        status: CouncilStatus,
        created_at: Timestamp,
        resolved_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            issue,
            convener,
            status,
            created_at,
            resolved_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &CouncilId {
        &self.id
    }

    pub fn issue(&self) -> &str {
        &self.issue
    }

    pub fn convener(&self) -> &Username {
        &self.convener
    }

    pub fn status(&self) -> CouncilStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// When the council was resolved or closed.
    pub fn resolved_at(&self) -> Option<&Timestamp> {
        self.resolved_at.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Fails with `CouncilNotActive` once the council is resolved or closed.
    pub fn ensure_active(&self) -> Result<(), DomainError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::CouncilNotActive,
                format!("Council is {}", self.status),
            )
            .with_detail("id", self.id.to_string()))
        }
    }

    /// Moves the council into the terminal status matching a passed motion.
    ///
    /// # Errors
    ///
    /// - `CouncilNotActive` if the council already terminated
    pub fn terminate(&mut self, kind: MotionKind, at: Timestamp) -> Result<(), DomainError> {
        self.ensure_active()?;
        self.status = self
            .status
            .transition_to(kind.terminal_status())
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        self.resolved_at = Some(at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Username {
        Username::new("alice").unwrap()
    }

    fn sample_council() -> Council {
        Council::new(CouncilId::new(), "  Where should the library go?  ", alice()).unwrap()
    }

    #[test]
    fn new_council_is_active_and_trims_issue() {
        let council = sample_council();

        assert!(council.is_active());
        assert_eq!(council.issue(), "Where should the library go?");
        assert_eq!(council.convener(), &alice());
        assert!(council.resolved_at().is_none());
    }

    #[test]
    fn new_rejects_short_issue() {
        let err = Council::new(CouncilId::new(), "  too short", alice()).unwrap_err();
        assert_eq!(err.code, ErrorCode::TooShort);
        assert_eq!(err.detail("field"), Some("issue"));
    }

    #[test]
    fn terminate_sets_status_and_resolved_at() {
        let mut council = sample_council();
        let at = Timestamp::from_unix_secs(1705314600);

        council.terminate(MotionKind::Close, at).unwrap();

        assert_eq!(council.status(), CouncilStatus::Closed);
        assert_eq!(council.resolved_at(), Some(&at));
    }

    #[test]
    fn terminate_happens_only_once() {
        let mut council = sample_council();
        council.terminate(MotionKind::Resolve, Timestamp::now()).unwrap();

        let err = council
            .terminate(MotionKind::Close, Timestamp::now())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CouncilNotActive);
        assert_eq!(council.status(), CouncilStatus::Resolved);
    }
}
