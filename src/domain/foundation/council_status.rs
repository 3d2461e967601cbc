//! CouncilStatus enum for tracking the lifecycle of a council.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a council.
///
/// `Active` is the only non-terminal state; a council leaves it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CouncilStatus {
    #[default]
    Active,
    Resolved,
    Closed,
}

impl CouncilStatus {
    /// Returns true while members may still deliberate.
    pub fn is_active(&self) -> bool {
        matches!(self, CouncilStatus::Active)
    }
}

impl StateMachine for CouncilStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CouncilStatus::*;
        matches!((self, target), (Active, Resolved) | (Active, Closed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CouncilStatus::*;
        match self {
            Active => vec![Resolved, Closed],
            Resolved | Closed => vec![],
        }
    }
}

impl fmt::Display for CouncilStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CouncilStatus::Active => "active",
            CouncilStatus::Resolved => "resolved",
            CouncilStatus::Closed => "closed",
        };
        write!(f, "{}", s)
    }
}
