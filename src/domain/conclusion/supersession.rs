//! Amendment supersession, decided when a council resolves.
//!
//! Amendments are visited oldest-first. An active amendment replaces its
//! still-active original iff its net support is strictly greater.

use std::collections::BTreeSet;

use crate::domain::foundation::{ConclusionId, DomainError, Username};

use super::{Conclusion, Opinion, OpinionTally};

/// One supersession that took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Supersession {
    pub original: ConclusionId,
    pub amendment: ConclusionId,
}

/// Applies supersession to `conclusions` in place.
///
/// Returns the replacements made, in evaluation order.
pub fn apply_supersession(
    conclusions: &mut [Conclusion],
    opinions: &[Opinion],
    accepted: &BTreeSet<Username>,
) -> Result<Vec<Supersession>, DomainError> {
    let amendments: Vec<(ConclusionId, ConclusionId)> = {
        let mut ordered: Vec<&Conclusion> =
            conclusions.iter().filter(|c| c.is_amendment()).collect();
        ordered.sort_by(|a, b| Conclusion::chronological(a, b));
        ordered
            .into_iter()
            .filter_map(|c| c.replaces_id().map(|original| (*c.id(), *original)))
            .collect()
    };

    let mut applied = Vec::new();
    for (amendment_id, original_id) in amendments {
        let amendment_active = conclusions
            .iter()
            .any(|c| c.id() == &amendment_id && c.is_active());
        let Some(original) = conclusions.iter_mut().find(|c| c.id() == &original_id) else {
            continue;
        };
        if !amendment_active || !original.is_active() {
            continue;
        }

        let amendment_net = OpinionTally::of(&amendment_id, opinions, accepted).net();
        let original_net = OpinionTally::of(&original_id, opinions, accepted).net();
        if amendment_net > original_net {
            original.supersede_by(amendment_id)?;
            applied.push(Supersession {
                original: original_id,
                amendment: amendment_id,
            });
        }
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CouncilId, Stance};

    fn user(name: &str) -> Username {
        Username::new(name).unwrap()
    }

    fn accepted() -> BTreeSet<Username> {
        [user("alice"), user("bob_1"), user("carol")]
            .into_iter()
            .collect()
    }

    fn opinion(on: &Conclusion, who: &str, stance: Stance) -> Opinion {
        Opinion::new(*on.id(), user(who), stance, "Considered reasoning").unwrap()
    }

    fn original_and_amendment() -> (Conclusion, Conclusion) {
        let original =
            Conclusion::propose(ConclusionId::new(), CouncilId::new(), "Build it", user("alice"))
                .unwrap();
        let amendment =
            Conclusion::amend(ConclusionId::new(), &original, "Build it later", user("bob_1"))
                .unwrap();
        (original, amendment)
    }

    #[test]
    fn higher_net_support_replaces_original() {
        let (original, amendment) = original_and_amendment();
        let opinions = vec![
            opinion(&original, "alice", Stance::Oppose),
            opinion(&amendment, "alice", Stance::Support),
            opinion(&amendment, "bob_1", Stance::Support),
        ];
        let mut conclusions = vec![original.clone(), amendment.clone()];

        let applied = apply_supersession(&mut conclusions, &opinions, &accepted()).unwrap();

        assert_eq!(
            applied,
            vec![Supersession {
                original: *original.id(),
                amendment: *amendment.id()
            }]
        );
        assert!(!conclusions[0].is_active());
        assert_eq!(conclusions[0].replaced_by_id(), Some(amendment.id()));
        assert!(conclusions[1].is_active());
    }

    #[test]
    fn equal_net_support_keeps_both() {
        let (original, amendment) = original_and_amendment();
        let opinions = vec![
            opinion(&original, "alice", Stance::Support),
            opinion(&amendment, "bob_1", Stance::Support),
        ];
        let mut conclusions = vec![original, amendment];

        let applied = apply_supersession(&mut conclusions, &opinions, &accepted()).unwrap();

        assert!(applied.is_empty());
        assert!(conclusions.iter().all(Conclusion::is_active));
    }

    #[test]
    fn opinions_of_non_members_do_not_count() {
        let (original, amendment) = original_and_amendment();
        let opinions = vec![opinion(&amendment, "mallory", Stance::Support)];
        let mut conclusions = vec![original, amendment];

        let applied = apply_supersession(&mut conclusions, &opinions, &accepted()).unwrap();
        assert!(applied.is_empty());
    }
}
