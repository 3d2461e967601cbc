//! MemberStatus enum for council invitations.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Invitation status of a council member.
///
/// Nothing ever returns to `Invited`. Declined members may still accept later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    #[default]
    Invited,
    Accepted,
    Declined,
}

impl MemberStatus {
    /// Accepted members form the quorum base.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MemberStatus::Accepted)
    }
}

impl StateMachine for MemberStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use MemberStatus::*;
        matches!(
            (self, target),
            (Invited, Accepted) | (Invited, Declined) | (Declined, Accepted) | (Accepted, Declined)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use MemberStatus::*;
        match self {
            Invited => vec![Accepted, Declined],
            Accepted => vec![Declined],
            Declined => vec![Accepted],
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MemberStatus::Invited => "invited",
            MemberStatus::Accepted => "accepted",
            MemberStatus::Declined => "declined",
        };
        write!(f, "{}", s)
    }
}
