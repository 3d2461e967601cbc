//! MotionStatus enum for resolution motions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Status of a resolution motion.
///
/// There is no timeout: a motion stays `Pending` until it passes or its
/// proposer withdraws it (`Failed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MotionStatus {
    #[default]
    Pending,
    Passed,
    Failed,
}

impl MotionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, MotionStatus::Pending)
    }
}

impl StateMachine for MotionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use MotionStatus::*;
        matches!((self, target), (Pending, Passed) | (Pending, Failed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use MotionStatus::*;
        match self {
            Pending => vec![Passed, Failed],
            Passed | Failed => vec![],
        }
    }
}

impl fmt::Display for MotionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MotionStatus::Pending => "pending",
            MotionStatus::Passed => "passed",
            MotionStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passed_is_a_one_way_gate() {
        assert!(MotionStatus::Passed.is_terminal());
        assert!(MotionStatus::Pending
            .transition_to(MotionStatus::Passed)
            .is_ok());
        assert!(MotionStatus::Passed
            .transition_to(MotionStatus::Pending)
            .is_err());
    }

    #[test]
    fn failed_cannot_pass() {
        assert!(!MotionStatus::Failed.can_transition_to(&MotionStatus::Passed));
    }
}
