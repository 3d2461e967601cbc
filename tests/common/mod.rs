//! Shared fixtures for council integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use council_engine::adapters::InMemoryEventBus;
use council_engine::application::{
    AcceptInvitationCommand, CastVoteCommand, CastVoteResult, CouncilEngine,
    CreateCouncilCommand, ProposeConclusionCommand, ProposeResolutionCommand,
    RecordOpinionCommand,
};
use council_engine::config::EngineConfig;
use council_engine::domain::foundation::{
    CommandMetadata, ConclusionId, CouncilId, MotionId, MotionKind, Stance, Username,
};

pub const ISSUE: &str = "Where should the new library be built?";

pub fn user(name: &str) -> Username {
    Username::new(name).expect("valid test username")
}

pub fn as_user(name: &str) -> CommandMetadata {
    CommandMetadata::new(user(name))
}

/// An engine over fresh in-memory adapters with one council.
pub struct Fixture {
    pub engine: Arc<CouncilEngine>,
    pub bus: Arc<InMemoryEventBus>,
    pub council_id: CouncilId,
}

/// Creates a council convened by `members[0]` where every name has accepted.
pub async fn council_with(members: &[&str]) -> Fixture {
    let (engine, bus) = CouncilEngine::in_memory(EngineConfig::default());
    let mut fixture = Fixture {
        engine: Arc::new(engine),
        bus,
        council_id: CouncilId::new(),
    };
    fixture.council_id = fixture.create(members).await;
    fixture
}

impl Fixture {
    /// Creates another council on the same engine, everyone accepted.
    pub async fn create(&self, members: &[&str]) -> CouncilId {
        let (convener, invitees) = members.split_first().expect("at least a convener");
        let created = self
            .engine
            .create_council(
                CreateCouncilCommand {
                    issue: ISSUE.to_string(),
                    invitees: invitees.iter().map(|n| user(n)).collect(),
                },
                as_user(convener),
            )
            .await
            .expect("council created");
        let council_id = *created.council.id();
        for name in invitees {
            self.engine
                .accept_invitation(AcceptInvitationCommand { council_id }, as_user(name))
                .await
                .expect("invitation accepted");
        }
        council_id
    }

    pub async fn propose(&self, author: &str, text: &str) -> ConclusionId {
        *self
            .engine
            .propose_conclusion(
                ProposeConclusionCommand {
                    council_id: self.council_id,
                    text: text.to_string(),
                },
                as_user(author),
            )
            .await
            .expect("conclusion proposed")
            .conclusion
            .id()
    }

    pub async fn opine(&self, author: &str, conclusion_id: ConclusionId, stance: Stance, reasoning: &str) {
        self.engine
            .record_opinion(
                RecordOpinionCommand {
                    conclusion_id,
                    stance,
                    reasoning: reasoning.to_string(),
                },
                as_user(author),
            )
            .await
            .expect("opinion recorded");
    }

    pub async fn motion(&self, proposer: &str, kind: MotionKind) -> MotionId {
        *self
            .engine
            .propose_resolution(
                ProposeResolutionCommand {
                    council_id: self.council_id,
                    kind,
                },
                as_user(proposer),
            )
            .await
            .expect("motion proposed")
            .motion
            .id()
    }

    pub async fn vote(&self, voter: &str, motion_id: MotionId, stance: Stance) -> CastVoteResult {
        self.engine
            .cast_vote(CastVoteCommand { motion_id, stance }, as_user(voter))
            .await
            .expect("vote cast")
    }
}
