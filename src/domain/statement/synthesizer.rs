//! Final statement synthesis.
//!
//! A pure function of the frozen council state: the same council, members,
//! conclusions and opinions always yield the same text. The only dates used
//! are `created_at` and `resolved_at`.

use std::collections::BTreeSet;

use crate::domain::conclusion::{Conclusion, Opinion, OpinionTally};
use crate::domain::council::{Council, Member};
use crate::domain::foundation::{CouncilStatus, DomainError, ErrorCode, Stance, Username};

use super::prose::join_list;

/// A conclusion carried by a majority, with the opposing opinions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Majoritarian<'a> {
    pub conclusion: &'a Conclusion,
    pub dissents: Vec<&'a Opinion>,
}

/// How each active conclusion fared among accepted members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    pub unanimous: Vec<&'a Conclusion>,
    pub majoritarian: Vec<Majoritarian<'a>>,
}

/// Classifies active conclusions, oldest first.
///
/// `accepted` is in membership order; dissents follow that order.
pub fn classify<'a>(
    accepted: &[&Username],
    conclusions: &'a [Conclusion],
    opinions: &'a [Opinion],
) -> Classification<'a> {
    let quorum: BTreeSet<Username> = accepted.iter().map(|u| (*u).clone()).collect();
    let mut active: Vec<&Conclusion> = conclusions.iter().filter(|c| c.is_active()).collect();
    active.sort_by(|a, b| Conclusion::chronological(a, b));

    let mut classification = Classification::default();
    for conclusion in active {
        let tally = OpinionTally::of(conclusion.id(), opinions, &quorum);
        if tally.opposes == 0 && tally.supports == quorum.len() {
            classification.unanimous.push(conclusion);
        } else if tally.supports > tally.opposes {
            let mut dissents: Vec<&Opinion> = opinions
                .iter()
                .filter(|o| {
                    o.conclusion_id() == conclusion.id()
                        && o.stance() == Stance::Oppose
                        && quorum.contains(o.author())
                })
                .collect();
            dissents.sort_by_key(|o| accepted.iter().position(|u| *u == o.author()));
            classification.majoritarian.push(Majoritarian {
                conclusion,
                dissents,
            });
        }
    }
    classification
}

/// Renders the final statement for a resolved or closed council.
///
/// # Errors
///
/// - `InvalidStateTransition` if the council is still active
pub fn synthesize(
    council: &Council,
    members: &[Member],
    conclusions: &[Conclusion],
    opinions: &[Opinion],
) -> Result<String, DomainError> {
    let resolved_at = match (council.status(), council.resolved_at()) {
        (CouncilStatus::Active, _) | (_, None) => {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Cannot synthesize a statement for an active council",
            )
            .with_detail("id", council.id().to_string()))
        }
        (_, Some(at)) => at,
    };

    let accepted: Vec<&Username> = members
        .iter()
        .filter(|m| m.is_accepted())
        .map(Member::username)
        .collect();
    let handles: Vec<String> = accepted.iter().map(|u| u.handle()).collect();
    let from = council.created_at().to_long_form();
    let to = resolved_at.to_long_form();

    if council.status() == CouncilStatus::Closed {
        return Ok(format!(
            "From {} to {}, the users {} convened a council on the issue: {}. \
             The council was closed without resolving upon any conclusions.",
            from,
            to,
            join_list(&handles),
            council.issue()
        ));
    }

    let mut statement = format!(
        "From {} to {}, we, the users {}, convened a council on the issue: {}.",
        from,
        to,
        join_list(&handles),
        council.issue()
    );

    let classification = classify(&accepted, conclusions, opinions);

    if !classification.unanimous.is_empty() {
        let texts: Vec<&str> = classification.unanimous.iter().map(|c| c.text()).collect();
        statement.push_str(&format!(
            " We have resolved, unanimously, on the following conclusions: {}.",
            join_list(&texts)
        ));
    }

    if !classification.majoritarian.is_empty() {
        let texts: Vec<&str> = classification
            .majoritarian
            .iter()
            .map(|m| m.conclusion.text())
            .collect();
        let dissents: Vec<String> = classification
            .majoritarian
            .iter()
            .flat_map(|m| {
                m.dissents.iter().map(move |d| {
                    format!(
                        "{} dissents on \"{}\": {}",
                        d.author().handle(),
                        m.conclusion.text(),
                        d.reasoning()
                    )
                })
            })
            .collect();
        let dissent_text = if dissents.is_empty() {
            "none".to_string()
        } else {
            dissents.join("; ")
        };

        statement.push_str(&format!(
            " A majority also resolved on the following conclusions: {}.",
            join_list(&texts)
        ));
        statement.push_str(&format!(
            " The minority adds their dissent: {}.",
            dissent_text
        ));
    }

    Ok(statement)
}
