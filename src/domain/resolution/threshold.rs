//! Pass thresholds for resolution motions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::MotionKind;

/// Rule deciding whether a motion has enough support.
///
/// ```ignore
/// assert!(PassRule::Majority.is_satisfied(2, 3));
/// assert!(!PassRule::Majority.is_satisfied(2, 4)); // tie fails
/// assert!(!PassRule::Unanimous.is_satisfied(2, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassRule {
    /// Every accepted member supports.
    Unanimous,
    /// Strictly more than half of the accepted members support.
    Majority,
}

impl PassRule {
    pub fn for_kind(kind: MotionKind) -> Self {
        match kind {
            MotionKind::Resolve => PassRule::Unanimous,
            MotionKind::Close => PassRule::Majority,
        }
    }

    /// `support` and `accepted` are both read at evaluation time.
    ///
    /// Never satisfied when no member is accepted.
    pub fn is_satisfied(&self, support: usize, accepted: usize) -> bool {
        if accepted == 0 {
            return false;
        }
        match self {
            PassRule::Unanimous => support == accepted,
            PassRule::Majority => support > accepted / 2,
        }
    }

    /// Minimum support needed for the given quorum.
    pub fn min_support_needed(&self, accepted: usize) -> usize {
        match self {
            PassRule::Unanimous => accepted,
            PassRule::Majority => accepted / 2 + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_selects_rule() {
        assert_eq!(PassRule::for_kind(MotionKind::Resolve), PassRule::Unanimous);
        assert_eq!(PassRule::for_kind(MotionKind::Close), PassRule::Majority);
    }

    #[test]
    fn unanimous_needs_everyone() {
        assert!(PassRule::Unanimous.is_satisfied(3, 3));
        assert!(!PassRule::Unanimous.is_satisfied(2, 3));
        assert!(PassRule::Unanimous.is_satisfied(1, 1));
    }

    #[test]
    fn majority_is_strict() {
        assert!(PassRule::Majority.is_satisfied(2, 3));
        assert!(!PassRule::Majority.is_satisfied(2, 4));
        assert!(PassRule::Majority.is_satisfied(3, 4));
        assert!(PassRule::Majority.is_satisfied(1, 1));
    }

    #[test]
    fn empty_quorum_never_passes() {
        assert!(!PassRule::Unanimous.is_satisfied(0, 0));
        assert!(!PassRule::Majority.is_satisfied(0, 0));
    }

    #[test]
    fn min_support_matches_is_satisfied() {
        for accepted in 1..10 {
            for rule in [PassRule::Unanimous, PassRule::Majority] {
                let needed = rule.min_support_needed(accepted);
                assert!(rule.is_satisfied(needed, accepted));
                assert!(!rule.is_satisfied(needed - 1, accepted));
            }
        }
    }
}
