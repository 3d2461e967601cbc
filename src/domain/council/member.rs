//! Council member entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CouncilId, MemberStatus, Timestamp, Username};

/// One (council, username) membership row.
///
/// `joined_at` is set iff the member is accepted. Nothing moves back to
/// `Invited`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    council_id: CouncilId,
    username: Username,
    status: MemberStatus,
    invited_at: Timestamp,
    joined_at: Option<Timestamp>,
}

impl Member {
    /// A freshly invited member.
    pub fn invited(council_id: CouncilId, username: Username, at: Timestamp) -> Self {
        Self {
            council_id,
            username,
            status: MemberStatus::Invited,
            invited_at: at,
            joined_at: None,
        }
    }

    /// The convener, accepted from the moment the council exists.
    pub fn convener(council_id: CouncilId, username: Username, at: Timestamp) -> Self {
        Self {
            council_id,
            username,
            status: MemberStatus::Accepted,
            invited_at: at,
            joined_at: Some(at),
        }
    }

    pub fn reconstitute(
        council_id: CouncilId,
        username: Username,
        status: MemberStatus,
        invited_at: Timestamp,
        joined_at: Option<Timestamp>,
    ) -> Self {
        Self {
            council_id,
            username,
            status,
            invited_at,
            joined_at,
        }
    }

    pub fn council_id(&self) -> &CouncilId {
        &self.council_id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn status(&self) -> MemberStatus {
        self.status
    }

    pub fn invited_at(&self) -> &Timestamp {
        &self.invited_at
    }

    pub fn joined_at(&self) -> Option<&Timestamp> {
        self.joined_at.as_ref()
    }

    pub fn is_accepted(&self) -> bool {
        self.status.is_accepted()
    }

    /// Accepts the invitation. Returns false when already accepted.
    pub fn accept(&mut self, at: Timestamp) -> bool {
        if self.status == MemberStatus::Accepted {
            return false;
        }
        self.status = MemberStatus::Accepted;
        self.joined_at = Some(at);
        true
    }

    /// Declines (or leaves). Returns false when already declined.
    pub fn decline(&mut self) -> bool {
        if self.status == MemberStatus::Declined {
            return false;
        }
        self.status = MemberStatus::Declined;
        self.joined_at = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> Member {
        Member::invited(
            CouncilId::new(),
            Username::new("bob_1").unwrap(),
            Timestamp::from_unix_secs(1_700_000_000),
        )
    }

    #[test]
    fn convener_starts_accepted() {
        let at = Timestamp::now();
        let member = Member::convener(CouncilId::new(), Username::new("alice").unwrap(), at);
        assert!(member.is_accepted());
        assert_eq!(member.joined_at(), Some(&at));
    }

    #[test]
    fn accept_sets_joined_at_once() {
        let mut member = bob();
        let at = Timestamp::from_unix_secs(1_700_000_100);

        assert!(member.accept(at));
        assert!(!member.accept(Timestamp::now()));
        assert_eq!(member.joined_at(), Some(&at));
    }

    #[test]
    fn declined_member_may_accept_later() {
        let mut member = bob();
        assert!(member.decline());
        assert!(!member.decline());
        assert!(member.joined_at().is_none());

        assert!(member.accept(Timestamp::now()));
        assert_eq!(member.status(), MemberStatus::Accepted);
    }

    #[test]
    fn accepted_member_can_leave() {
        let mut member = bob();
        member.accept(Timestamp::now());
        assert!(member.decline());
        assert_eq!(member.status(), MemberStatus::Declined);
        assert!(member.joined_at().is_none());
    }
}
