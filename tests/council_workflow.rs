//! End-to-end council workflows over the in-memory adapters.
//!
//! Covers the deliberation scenarios (unanimous resolve, blocked resolve,
//! majority close, opinion revision, list grammar) plus membership,
//! withdrawal and amendment supersession.

mod common;

use common::{as_user, council_with, user, ISSUE};

use council_engine::application::{
    AcceptInvitationCommand, CastVoteCommand, DeclineInvitationCommand, GetCouncilViewQuery,
    GetFinalStatementQuery, InviteMembersCommand, ListCouncilsQuery, ProposeAmendmentCommand,
    ProposeConclusionCommand, ProposeResolutionCommand, VoteOutcome, WithdrawResolutionCommand,
};
use council_engine::domain::foundation::{
    CouncilId, CouncilStatus, MemberStatus, MotionKind, MotionStatus, Stance,
};
use council_engine::domain::statement::join_list;

// =============================================================================
// Deliberation scenarios
// =============================================================================

#[tokio::test]
async fn unanimous_conclusion_and_unanimous_resolve_produce_statement() {
    let f = council_with(&["alice", "bob_1", "carol"]).await;
    let downtown = f.propose("alice", "Build it downtown").await;
    for name in ["alice", "bob_1", "carol"] {
        f.opine(name, downtown, Stance::Support, "Central and walkable").await;
    }

    let motion = f.motion("alice", MotionKind::Resolve).await;
    assert!(!f.vote("alice", motion, Stance::Support).await.outcome.is_passed());
    assert!(!f.vote("bob_1", motion, Stance::Support).await.outcome.is_passed());
    let last = f.vote("carol", motion, Stance::Support).await;

    let statement = match last.outcome {
        VoteOutcome::Passed { statement } => statement,
        other => panic!("expected pass, got {:?}", other),
    };
    assert_eq!(statement.kind(), MotionKind::Resolve);
    assert!(statement
        .text()
        .contains(&format!("we, the users @alice, @bob_1, and @carol, convened a council on the issue: {}.", ISSUE)));
    assert!(statement
        .text()
        .ends_with(" We have resolved, unanimously, on the following conclusions: Build it downtown."));
    assert!(!statement.text().contains("dissent"));

    let view = f
        .engine
        .get_council_view(GetCouncilViewQuery { council_id: f.council_id }, as_user("bob_1"))
        .await
        .unwrap();
    assert_eq!(view.council.status(), CouncilStatus::Resolved);
    assert!(view.council.resolved_at().is_some());
    assert!(view.active_motion.is_none());
    assert_eq!(view.motions[0].status(), MotionStatus::Passed);
    assert_eq!(view.statement.as_ref().map(|s| s.text()), Some(statement.text()));

    assert_eq!(f.bus.events_of_type("motion.passed.v1").len(), 1);
    assert_eq!(f.bus.events_of_type("council.terminated.v1").len(), 1);
    assert_eq!(f.bus.events_of_type("statement.generated.v1").len(), 1);
}

#[tokio::test]
async fn resolve_short_of_unanimity_stays_pending() {
    let f = council_with(&["alice", "bob_1", "carol"]).await;
    let downtown = f.propose("alice", "Build it downtown").await;
    f.opine("alice", downtown, Stance::Support, "Central and walkable").await;
    f.opine("bob_1", downtown, Stance::Support, "Close to the station").await;
    f.opine("carol", downtown, Stance::Oppose, "Too far from the school").await;

    let motion = f.motion("alice", MotionKind::Resolve).await;
    f.vote("alice", motion, Stance::Support).await;
    f.vote("bob_1", motion, Stance::Support).await;
    let result = f.vote("carol", motion, Stance::Oppose).await;

    assert_eq!(
        result.outcome,
        VoteOutcome::Pending {
            support: 2,
            needed: 3,
            accepted: 3
        }
    );
    assert!(result.motion.is_pending());

    let statement = f
        .engine
        .get_final_statement(GetFinalStatementQuery { council_id: f.council_id }, as_user("carol"))
        .await
        .unwrap_err();
    assert!(statement.is_not_found());

    // Carol changes her vote; the majoritarian conclusion carries her dissent.
    let result = f.vote("carol", motion, Stance::Support).await;
    assert_eq!(result.previous, Some(Stance::Oppose));
    let VoteOutcome::Passed { statement } = result.outcome else {
        panic!("expected the motion to pass");
    };
    assert!(statement.text().ends_with(
        " A majority also resolved on the following conclusions: Build it downtown. \
         The minority adds their dissent: @carol dissents on \"Build it downtown\": Too far from the school."
    ));
    assert!(!statement.text().contains("unanimously"));
}

#[tokio::test]
async fn close_passes_on_strict_majority_only() {
    let f = council_with(&["alice", "bob_1", "carol", "dave"]).await;
    f.propose("alice", "Build it downtown").await;

    let motion = f.motion("bob_1", MotionKind::Close).await;
    f.vote("alice", motion, Stance::Support).await;
    let tie = f.vote("bob_1", motion, Stance::Support).await;
    assert_eq!(
        tie.outcome,
        VoteOutcome::Pending {
            support: 2,
            needed: 3,
            accepted: 4
        }
    );

    let result = f.vote("carol", motion, Stance::Support).await;
    let VoteOutcome::Passed { statement } = result.outcome else {
        panic!("three of four should close the council");
    };
    assert_eq!(statement.kind(), MotionKind::Close);
    assert!(statement.text().contains(&format!(
        "the users @alice, @bob_1, @carol, and @dave convened a council on the issue: {}.",
        ISSUE
    )));
    assert!(statement
        .text()
        .ends_with("The council was closed without resolving upon any conclusions."));
    assert!(!statement.text().contains("downtown"));

    let view = f
        .engine
        .get_council_view(GetCouncilViewQuery { council_id: f.council_id }, as_user("dave"))
        .await
        .unwrap();
    assert_eq!(view.council.status(), CouncilStatus::Closed);
}

#[tokio::test]
async fn second_opinion_replaces_the_first() {
    let f = council_with(&["alice", "bob_1"]).await;
    let idea = f.propose("alice", "Build it downtown").await;

    f.opine("bob_1", idea, Stance::Support, "good idea here").await;
    f.opine("bob_1", idea, Stance::Oppose, "changed my mind entirely").await;

    let view = f
        .engine
        .get_council_view(GetCouncilViewQuery { council_id: f.council_id }, as_user("alice"))
        .await
        .unwrap();
    let opinions = &view.conclusions[0].opinions;
    assert_eq!(opinions.len(), 1);
    assert_eq!(opinions[0].stance(), Stance::Oppose);
    assert_eq!(opinions[0].reasoning(), "changed my mind entirely");
    assert_eq!(view.conclusions[0].tally.opposes, 1);

    let recorded = f.bus.events_of_type("opinion.recorded.v1");
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[1].payload["was_update"], serde_json::json!(true));
}

#[test]
fn conclusion_lists_read_as_prose() {
    assert_eq!(join_list(&["A"]), "A");
    assert_eq!(join_list(&["A", "B"]), "A and B");
    assert_eq!(join_list(&["A", "B", "C"]), "A, B, and C");
}

// =============================================================================
// Membership
// =============================================================================

#[tokio::test]
async fn invited_member_cannot_act_until_accepting() {
    let f = council_with(&["alice"]).await;
    f.engine
        .invite_members(
            InviteMembersCommand {
                council_id: f.council_id,
                usernames: vec![user("bob_1"), user("alice")],
            },
            as_user("alice"),
        )
        .await
        .unwrap();

    let err = f
        .engine
        .propose_conclusion(
            ProposeConclusionCommand {
                council_id: f.council_id,
                text: "Build it downtown".into(),
            },
            as_user("bob_1"),
        )
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());

    // Invited members may still read the council.
    let view = f
        .engine
        .get_council_view(GetCouncilViewQuery { council_id: f.council_id }, as_user("bob_1"))
        .await
        .unwrap();
    assert_eq!(view.accepted_count, 1);
    assert_eq!(view.members[1].status(), MemberStatus::Invited);
}

#[tokio::test]
async fn reinviting_is_a_no_op() {
    let f = council_with(&["alice", "bob_1"]).await;

    let result = f
        .engine
        .invite_members(
            InviteMembersCommand {
                council_id: f.council_id,
                usernames: vec![user("bob_1"), user("carol"), user("carol")],
            },
            as_user("bob_1"),
        )
        .await
        .unwrap();

    let added: Vec<&str> = result.added.iter().map(|m| m.username().as_str()).collect();
    assert_eq!(added, vec!["carol"]);
    assert_eq!(f.bus.events_of_type("council.members_invited.v1").len(), 1);
}

#[tokio::test]
async fn strangers_cannot_accept_or_read() {
    let f = council_with(&["alice"]).await;

    let err = f
        .engine
        .decline_invitation(DeclineInvitationCommand { council_id: f.council_id }, as_user("mallory"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = f
        .engine
        .get_council_view(GetCouncilViewQuery { council_id: f.council_id }, as_user("mallory"))
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn declined_member_no_longer_counts_toward_quorum() {
    let f = council_with(&["alice", "bob_1", "carol"]).await;
    let motion = f.motion("alice", MotionKind::Resolve).await;
    f.vote("alice", motion, Stance::Support).await;
    f.vote("carol", motion, Stance::Support).await;

    let declined = f
        .engine
        .decline_invitation(DeclineInvitationCommand { council_id: f.council_id }, as_user("carol"))
        .await
        .unwrap();
    assert!(declined.changed);

    // Carol's earlier vote no longer counts and she can no longer vote.
    let err = f
        .engine
        .cast_vote(
            CastVoteCommand {
                motion_id: motion,
                stance: Stance::Support,
            },
            as_user("carol"),
        )
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());

    let result = f.vote("bob_1", motion, Stance::Support).await;
    let VoteOutcome::Passed { statement } = result.outcome else {
        panic!("two of two accepted members should resolve");
    };
    assert!(statement.text().contains("we, the users @alice and @bob_1, convened"));
}

#[tokio::test]
async fn member_joining_after_proposal_raises_unanimity() {
    let f = council_with(&["alice", "bob_1"]).await;
    let motion = f.motion("alice", MotionKind::Resolve).await;
    f.vote("alice", motion, Stance::Support).await;

    f.engine
        .invite_members(
            InviteMembersCommand {
                council_id: f.council_id,
                usernames: vec![user("carol")],
            },
            as_user("alice"),
        )
        .await
        .unwrap();
    f.engine
        .accept_invitation(AcceptInvitationCommand { council_id: f.council_id }, as_user("carol"))
        .await
        .unwrap();

    let result = f.vote("bob_1", motion, Stance::Support).await;
    assert_eq!(
        result.outcome,
        VoteOutcome::Pending {
            support: 2,
            needed: 3,
            accepted: 3
        }
    );

    let result = f.vote("carol", motion, Stance::Support).await;
    let VoteOutcome::Passed { statement } = result.outcome else {
        panic!("all three accepted members support");
    };
    assert!(statement.text().contains("we, the users @alice, @bob_1, and @carol, convened"));
}

#[tokio::test]
async fn list_councils_filters_by_status() {
    let f = council_with(&["alice", "bob_1"]).await;
    let other = f.create(&["carol", "alice"]).await;
    let motion = f.motion("alice", MotionKind::Close).await;
    f.vote("alice", motion, Stance::Support).await;
    f.vote("bob_1", motion, Stance::Support).await;

    let all = f
        .engine
        .list_councils(ListCouncilsQuery::all(), as_user("alice"))
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].council.id(), &other);

    let active = f
        .engine
        .list_councils(ListCouncilsQuery::active(), as_user("alice"))
        .await
        .unwrap();
    let ids: Vec<CouncilId> = active.iter().map(|s| *s.council.id()).collect();
    assert_eq!(ids, vec![other]);
    assert_eq!(active[0].membership, MemberStatus::Accepted);
}

// =============================================================================
// Motions
// =============================================================================

#[tokio::test]
async fn only_one_motion_may_be_pending() {
    let f = council_with(&["alice", "bob_1"]).await;
    f.motion("alice", MotionKind::Resolve).await;

    let err = f
        .engine
        .propose_resolution(
            ProposeResolutionCommand {
                council_id: f.council_id,
                kind: MotionKind::Close,
            },
            as_user("bob_1"),
        )
        .await
        .unwrap_err();
    assert!(err.is_invalid_state());
}

#[tokio::test]
async fn withdrawn_motion_frees_the_council() {
    let f = council_with(&["alice", "bob_1"]).await;
    let motion = f.motion("alice", MotionKind::Resolve).await;

    let err = f
        .engine
        .withdraw_resolution(WithdrawResolutionCommand { motion_id: motion }, as_user("bob_1"))
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());

    let withdrawn = f
        .engine
        .withdraw_resolution(WithdrawResolutionCommand { motion_id: motion }, as_user("alice"))
        .await
        .unwrap();
    assert_eq!(withdrawn.motion.status(), MotionStatus::Failed);

    let err = f
        .engine
        .cast_vote(
            CastVoteCommand {
                motion_id: motion,
                stance: Stance::Support,
            },
            as_user("bob_1"),
        )
        .await
        .unwrap_err();
    assert!(err.is_invalid_state());

    let next = f.motion("bob_1", MotionKind::Close).await;
    assert_ne!(next, motion);
    assert_eq!(f.bus.events_of_type("motion.withdrawn.v1").len(), 1);
}

#[tokio::test]
async fn terminated_council_rejects_further_work() {
    let f = council_with(&["alice", "bob_1"]).await;
    let motion = f.motion("alice", MotionKind::Close).await;
    f.vote("alice", motion, Stance::Support).await;
    f.vote("bob_1", motion, Stance::Support).await;

    let err = f
        .engine
        .cast_vote(
            CastVoteCommand {
                motion_id: motion,
                stance: Stance::Oppose,
            },
            as_user("alice"),
        )
        .await
        .unwrap_err();
    assert!(err.is_invalid_state());

    let err = f
        .engine
        .propose_conclusion(
            ProposeConclusionCommand {
                council_id: f.council_id,
                text: "Build it downtown".into(),
            },
            as_user("alice"),
        )
        .await
        .unwrap_err();
    assert!(err.is_invalid_state());

    let statement = f
        .engine
        .get_final_statement(GetFinalStatementQuery { council_id: f.council_id }, as_user("bob_1"))
        .await
        .unwrap();
    assert_eq!(statement.council_id(), &f.council_id);
}

// =============================================================================
// Amendments
// =============================================================================

async fn resolve_unanimously(f: &common::Fixture, members: &[&str]) -> String {
    let motion = f.motion(members[0], MotionKind::Resolve).await;
    let mut outcome = None;
    for name in members {
        outcome = Some(f.vote(name, motion, Stance::Support).await.outcome);
    }
    match outcome {
        Some(VoteOutcome::Passed { statement }) => statement.text().to_string(),
        other => panic!("expected pass, got {:?}", other),
    }
}

#[tokio::test]
async fn better_supported_amendment_replaces_original() {
    let members = ["alice", "bob_1", "carol"];
    let f = council_with(&members).await;
    let original = f.propose("alice", "Build it downtown").await;
    let amendment = f
        .engine
        .propose_amendment(
            ProposeAmendmentCommand {
                council_id: f.council_id,
                original_id: original,
                text: "Build it by the river".into(),
            },
            as_user("bob_1"),
        )
        .await
        .unwrap()
        .conclusion;
    assert!(amendment.is_amendment());
    assert_eq!(amendment.replaces_id(), Some(&original));

    f.opine("alice", original, Stance::Support, "Central and walkable").await;
    f.opine("bob_1", original, Stance::Oppose, "Parking is impossible").await;
    f.opine("carol", original, Stance::Oppose, "Rents are far too high").await;
    for name in members {
        f.opine(name, *amendment.id(), Stance::Support, "The river site is lovely").await;
    }

    let text = resolve_unanimously(&f, &members).await;
    assert!(text.contains("unanimously, on the following conclusions: Build it by the river."));
    assert!(!text.contains("downtown"));

    let view = f
        .engine
        .get_council_view(GetCouncilViewQuery { council_id: f.council_id }, as_user("alice"))
        .await
        .unwrap();
    let active: Vec<&str> = view.conclusions.iter().map(|c| c.conclusion.text()).collect();
    assert_eq!(active, vec!["Build it by the river"]);

    let superseded = f.bus.events_of_type("conclusion.superseded.v1");
    assert_eq!(superseded.len(), 1);
    assert_eq!(superseded[0].payload["conclusion_id"], serde_json::json!(original));
}

#[tokio::test]
async fn equally_supported_amendment_keeps_both() {
    let members = ["alice", "bob_1", "carol"];
    let f = council_with(&members).await;
    let original = f.propose("alice", "Build it downtown").await;
    let amendment = *f
        .engine
        .propose_amendment(
            ProposeAmendmentCommand {
                council_id: f.council_id,
                original_id: original,
                text: "Build it by the river".into(),
            },
            as_user("bob_1"),
        )
        .await
        .unwrap()
        .conclusion
        .id();

    for id in [original, amendment] {
        f.opine("alice", id, Stance::Support, "Either site works for me").await;
        f.opine("bob_1", id, Stance::Support, "Either site works for me").await;
        f.opine("carol", id, Stance::Oppose, "Neither site is accessible").await;
    }

    let text = resolve_unanimously(&f, &members).await;
    assert!(text.contains("Build it downtown"));
    assert!(text.contains("Build it by the river"));
    assert!(f.bus.events_of_type("conclusion.superseded.v1").is_empty());
}

#[tokio::test]
async fn amendment_must_target_a_conclusion_of_the_same_council() {
    let f = council_with(&["alice", "bob_1"]).await;
    let other = f.create(&["alice"]).await;
    let foreign = *f
        .engine
        .propose_conclusion(
            ProposeConclusionCommand {
                council_id: other,
                text: "Build it downtown".into(),
            },
            as_user("alice"),
        )
        .await
        .unwrap()
        .conclusion
        .id();

    let err = f
        .engine
        .propose_amendment(
            ProposeAmendmentCommand {
                council_id: f.council_id,
                original_id: foreign,
                text: "Build it by the river".into(),
            },
            as_user("alice"),
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn view_lists_active_conclusions_newest_first() {
    let f = council_with(&["alice", "bob_1"]).await;
    f.propose("alice", "Build it downtown").await;
    f.propose("bob_1", "Build it by the river").await;

    let view = f
        .engine
        .get_council_view(GetCouncilViewQuery { council_id: f.council_id }, as_user("alice"))
        .await
        .unwrap();
    let texts: Vec<&str> = view.conclusions.iter().map(|c| c.conclusion.text()).collect();
    assert_eq!(texts, vec!["Build it by the river", "Build it downtown"]);
}
