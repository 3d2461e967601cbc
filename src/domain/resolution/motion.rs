//! ResolutionMotion aggregate.
//!
//! A motion asks the council to resolve or close. Votes are upserted per
//! member; the handler evaluates the threshold after every vote inside the
//! council's critical section.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CouncilId, DomainError, ErrorCode, MotionId, MotionKind, MotionStatus, Stance,
    StateMachine, Timestamp, Username,
};

use super::PassRule;

/// A resolution motion and its ballots.
///
/// # Invariants
///
/// - at most one vote per member
/// - `closed_at` is set iff `status` is not `Pending`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionMotion {
    id: MotionId,
    council_id: CouncilId,
    kind: MotionKind,
    proposed_by: Username,
    proposed_at: Timestamp,
    status: MotionStatus,
    closed_at: Option<Timestamp>,
    votes: BTreeMap<Username, Stance>,
}

impl ResolutionMotion {
    pub fn propose(
        id: MotionId,
        council_id: CouncilId,
        kind: MotionKind,
        proposed_by: Username,
    ) -> Self {
        Self {
            id,
            council_id,
            kind,
            proposed_by,
            proposed_at: Timestamp::now(),
            status: MotionStatus::Pending,
            closed_at: None,
            votes: BTreeMap::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MotionId,
        council_id: CouncilId,
        kind: MotionKind,
        proposed_by: Username,
        proposed_at: Timestamp,
        status: MotionStatus,
        closed_at: Option<Timestamp>,
        votes: BTreeMap<Username, Stance>,
    ) -> Self {
        Self {
            id,
            council_id,
            kind,
            proposed_by,
            proposed_at,
            status,
            closed_at,
            votes,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &MotionId {
        &self.id
    }

    pub fn council_id(&self) -> &CouncilId {
        &self.council_id
    }

    pub fn kind(&self) -> MotionKind {
        self.kind
    }

    pub fn proposed_by(&self) -> &Username {
        &self.proposed_by
    }

    pub fn proposed_at(&self) -> &Timestamp {
        &self.proposed_at
    }

    pub fn status(&self) -> MotionStatus {
        self.status
    }

    pub fn closed_at(&self) -> Option<&Timestamp> {
        self.closed_at.as_ref()
    }

    pub fn votes(&self) -> &BTreeMap<Username, Stance> {
        &self.votes
    }

    pub fn vote_of(&self, member: &Username) -> Option<Stance> {
        self.votes.get(member).copied()
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    pub fn pass_rule(&self) -> PassRule {
        PassRule::for_kind(self.kind)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Voting
    // ─────────────────────────────────────────────────────────────────────────

    /// Fails with `MotionNotPending` once the motion passed or was withdrawn.
    pub fn ensure_pending(&self) -> Result<(), DomainError> {
        if self.is_pending() {
            Ok(())
        } else {
            Err(
                DomainError::new(ErrorCode::MotionNotPending, format!("Motion is {}", self.status))
                    .with_detail("id", self.id.to_string()),
            )
        }
    }

    /// Records or replaces a member's vote. Returns the previous vote.
    pub fn cast_vote(
        &mut self,
        member: Username,
        stance: Stance,
    ) -> Result<Option<Stance>, DomainError> {
        self.ensure_pending()?;
        Ok(self.votes.insert(member, stance))
    }

    /// Support votes cast by members who are accepted right now.
    pub fn support_count_among(&self, accepted: &BTreeSet<Username>) -> usize {
        self.votes
            .iter()
            .filter(|(member, stance)| stance.is_support() && accepted.contains(*member))
            .count()
    }

    /// Whether the threshold is met for the given live quorum.
    pub fn is_carried(&self, accepted: &BTreeSet<Username>) -> bool {
        self.pass_rule()
            .is_satisfied(self.support_count_among(accepted), accepted.len())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    pub fn mark_passed(&mut self, at: Timestamp) -> Result<(), DomainError> {
        self.close_with(MotionStatus::Passed, at)
    }

    /// Withdraws the motion on behalf of its proposer.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if `by` did not propose the motion
    /// - `MotionNotPending` if it already passed or was withdrawn
    pub fn withdraw(&mut self, by: &Username, at: Timestamp) -> Result<(), DomainError> {
        if by != &self.proposed_by {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                format!("Only {} may withdraw this motion", self.proposed_by),
            ));
        }
        self.close_with(MotionStatus::Failed, at)
    }

    fn close_with(&mut self, status: MotionStatus, at: Timestamp) -> Result<(), DomainError> {
        self.ensure_pending()?;
        self.status = self
            .status
            .transition_to(status)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        self.closed_at = Some(at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> Username {
        Username::new(name).unwrap()
    }

    fn motion(kind: MotionKind) -> ResolutionMotion {
        ResolutionMotion::propose(MotionId::new(), CouncilId::new(), kind, user("alice"))
    }

    fn quorum(names: &[&str]) -> BTreeSet<Username> {
        names.iter().map(|n| user(n)).collect()
    }

    #[test]
    fn cast_vote_upserts() {
        let mut m = motion(MotionKind::Resolve);

        assert_eq!(m.cast_vote(user("alice"), Stance::Oppose).unwrap(), None);
        assert_eq!(
            m.cast_vote(user("alice"), Stance::Support).unwrap(),
            Some(Stance::Oppose)
        );
        assert_eq!(m.votes().len(), 1);
        assert_eq!(m.vote_of(&user("alice")), Some(Stance::Support));
    }

    #[test]
    fn support_count_ignores_members_who_left() {
        let mut m = motion(MotionKind::Close);
        m.cast_vote(user("alice"), Stance::Support).unwrap();
        m.cast_vote(user("bob_1"), Stance::Support).unwrap();

        assert_eq!(m.support_count_among(&quorum(&["alice", "bob_1"])), 2);
        assert_eq!(m.support_count_among(&quorum(&["alice", "carol"])), 1);
    }

    #[test]
    fn resolve_carries_only_with_everyone() {
        let mut m = motion(MotionKind::Resolve);
        let accepted = quorum(&["alice", "bob_1", "carol"]);
        m.cast_vote(user("alice"), Stance::Support).unwrap();
        m.cast_vote(user("bob_1"), Stance::Support).unwrap();
        assert!(!m.is_carried(&accepted));

        m.cast_vote(user("carol"), Stance::Support).unwrap();
        assert!(m.is_carried(&accepted));
    }

    #[test]
    fn passed_motion_rejects_votes() {
        let mut m = motion(MotionKind::Close);
        m.mark_passed(Timestamp::now()).unwrap();

        let err = m.cast_vote(user("bob_1"), Stance::Support).unwrap_err();
        assert_eq!(err.code, ErrorCode::MotionNotPending);
        assert!(m.closed_at().is_some());
    }

    #[test]
    fn only_proposer_can_withdraw() {
        let mut m = motion(MotionKind::Resolve);

        let err = m.withdraw(&user("bob_1"), Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);

        m.withdraw(&user("alice"), Timestamp::now()).unwrap();
        assert_eq!(m.status(), MotionStatus::Failed);
        assert!(m.withdraw(&user("alice"), Timestamp::now()).is_err());
    }
}
