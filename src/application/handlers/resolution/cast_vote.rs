//! CastVoteHandler - Command handler for voting on a motion.
//!
//! Every vote re-evaluates the threshold against the live quorum. When the
//! motion carries, the same critical section terminates the council, applies
//! supersession (resolve only), synthesizes the final statement and stores it.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::application::CouncilLocks;
use crate::domain::conclusion::{apply_supersession, ConclusionSuperseded};
use crate::domain::council::{Council, CouncilError, CouncilTerminated, Member};
use crate::domain::foundation::{
    CommandMetadata, ConclusionId, EventEnvelope, EventId, MotionId, MotionKind, Stance,
    Timestamp, Username,
};
use crate::domain::resolution::{MotionPassed, ResolutionMotion, VoteCast};
use crate::domain::statement::{synthesize, FinalStatement, StatementGenerated};
use crate::ports::{
    ConclusionRepository, CouncilRepository, EventPublisher, MemberRepository, MotionRepository,
    OpinionRepository, StatementRepository,
};

use super::super::support::{envelope, load_council, publish_committed, require_accepted};
use super::load_motion;

#[derive(Debug, Clone)]
pub struct CastVoteCommand {
    pub motion_id: MotionId,
    pub stance: Stance,
}

/// Where the motion stands after the vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VoteOutcome {
    Pending {
        support: usize,
        needed: usize,
        accepted: usize,
    },
    Passed {
        statement: FinalStatement,
    },
}

impl VoteOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, VoteOutcome::Passed { .. })
    }
}

#[derive(Debug, Clone)]
pub struct CastVoteResult {
    pub motion: ResolutionMotion,
    /// The caller's earlier vote, if this one replaced it.
    pub previous: Option<Stance>,
    pub outcome: VoteOutcome,
}

pub struct CastVoteHandler {
    councils: Arc<dyn CouncilRepository>,
    members: Arc<dyn MemberRepository>,
    conclusions: Arc<dyn ConclusionRepository>,
    opinions: Arc<dyn OpinionRepository>,
    motions: Arc<dyn MotionRepository>,
    statements: Arc<dyn StatementRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<CouncilLocks>,
}

impl CastVoteHandler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        councils: Arc<dyn CouncilRepository>,
        members: Arc<dyn MemberRepository>,
        conclusions: Arc<dyn ConclusionRepository>,
        opinions: Arc<dyn OpinionRepository>,
        motions: Arc<dyn MotionRepository>,
        statements: Arc<dyn StatementRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        locks: Arc<CouncilLocks>,
    ) -> Self {
        Self {
            councils,
            members,
            conclusions,
            opinions,
            motions,
            statements,
            event_publisher,
            locks,
        }
    }

    /// # Errors
    ///
    /// - `NotFound` if the motion doesn't exist
    /// - `InvalidState` if the motion is not pending or the council terminated
    /// - `Unauthorized` if the caller is not an accepted member
    pub async fn handle(
        &self,
        cmd: CastVoteCommand,
        metadata: CommandMetadata,
    ) -> Result<CastVoteResult, CouncilError> {
        let council_id = *load_motion(self.motions.as_ref(), &cmd.motion_id)
            .await?
            .council_id();
        let guard = self.locks.acquire(&council_id).await;

        // 1. Preconditions, re-read under the lock
        let motion = load_motion(self.motions.as_ref(), &cmd.motion_id).await?;
        if let Err(e) = motion.ensure_pending() {
            warn!(motion_id = %motion.id(), voter = %metadata.actor, "rejected: motion not pending");
            return Err(e.into());
        }
        let mut council = load_council(self.councils.as_ref(), &council_id).await?;
        council.ensure_active()?;
        require_accepted(self.members.as_ref(), &council_id, &metadata.actor).await?;

        // 2. Record the vote and evaluate against the live quorum
        let upsert = self
            .motions
            .upsert_vote(&cmd.motion_id, &metadata.actor, cmd.stance)
            .await?;
        let mut motion = upsert.motion;

        let members = self.members.list_by_council(&council_id).await?;
        let accepted: BTreeSet<Username> = members
            .iter()
            .filter(|m| m.is_accepted())
            .map(|m| m.username().clone())
            .collect();
        let support = motion.support_count_among(&accepted);
        let rule = motion.pass_rule();
        let passed = rule.is_satisfied(support, accepted.len());

        debug!(
            motion_id = %motion.id(),
            voter = %metadata.actor,
            stance = %cmd.stance,
            support,
            accepted = accepted.len(),
            "vote recorded"
        );

        let at = Timestamp::now();
        let mut events = vec![envelope(
            &VoteCast {
                event_id: EventId::new(),
                motion_id: *motion.id(),
                council_id,
                voter: metadata.actor.clone(),
                stance: cmd.stance,
                previous: upsert.previous,
                support_count: support,
                accepted_count: accepted.len(),
                cast_at: at,
            },
            &metadata,
        )];

        if !passed {
            drop(guard);
            publish_committed(self.event_publisher.as_ref(), events).await;
            return Ok(CastVoteResult {
                motion,
                previous: upsert.previous,
                outcome: VoteOutcome::Pending {
                    support,
                    needed: rule.min_support_needed(accepted.len()),
                    accepted: accepted.len(),
                },
            });
        }

        // 3. Terminate and synthesize
        motion.mark_passed(at)?;
        self.motions.update(&motion).await?;
        council.terminate(motion.kind(), at)?;
        self.councils.update(&council).await?;

        events.push(envelope(
            &MotionPassed {
                event_id: EventId::new(),
                motion_id: *motion.id(),
                council_id,
                kind: motion.kind(),
                support_count: support,
                accepted_count: accepted.len(),
                passed_at: at,
            },
            &metadata,
        ));

        let statement = self
            .conclude(&council, &members, &accepted, motion.kind(), at, &metadata, &mut events)
            .await?;
        drop(guard);
        // The council is terminal; its lock is no longer needed.
        self.locks.prune();

        info!(
            council_id = %council_id,
            motion_id = %motion.id(),
            status = %council.status(),
            "motion passed, council terminated"
        );

        events.push(envelope(
            &CouncilTerminated {
                event_id: EventId::new(),
                council_id,
                motion_id: *motion.id(),
                status: council.status(),
                resolved_at: at,
            },
            &metadata,
        ));
        events.push(envelope(
            &StatementGenerated {
                event_id: EventId::new(),
                council_id,
                kind: statement.kind(),
                text: statement.text().to_string(),
                generated_at: *statement.generated_at(),
            },
            &metadata,
        ));
        publish_committed(self.event_publisher.as_ref(), events).await;

        Ok(CastVoteResult {
            motion,
            previous: upsert.previous,
            outcome: VoteOutcome::Passed { statement },
        })
    }

    /// Applies supersession for a resolve, then renders and stores the statement.
    #[allow(clippy::too_many_arguments)]
    async fn conclude(
        &self,
        council: &Council,
        members: &[Member],
        accepted: &BTreeSet<Username>,
        kind: MotionKind,
        at: Timestamp,
        metadata: &CommandMetadata,
        events: &mut Vec<Option<EventEnvelope>>,
    ) -> Result<FinalStatement, CouncilError> {
        let (conclusions, opinions) = match kind {
            MotionKind::Close => (Vec::new(), Vec::new()),
            MotionKind::Resolve => {
                let mut conclusions = self.conclusions.list_by_council(council.id()).await?;
                let ids: Vec<ConclusionId> = conclusions.iter().map(|c| *c.id()).collect();
                let opinions = self.opinions.list_for_conclusions(&ids).await?;

                for applied in apply_supersession(&mut conclusions, &opinions, accepted)? {
                    if let Some(original) = conclusions.iter().find(|c| c.id() == &applied.original) {
                        self.conclusions.update(original).await?;
                    }
                    info!(
                        original = %applied.original,
                        amendment = %applied.amendment,
                        "conclusion superseded"
                    );
                    events.push(envelope(
                        &ConclusionSuperseded {
                            event_id: EventId::new(),
                            conclusion_id: applied.original,
                            replaced_by_id: applied.amendment,
                            council_id: *council.id(),
                            superseded_at: at,
                        },
                        metadata,
                    ));
                }
                (conclusions, opinions)
            }
        };

        let text = synthesize(council, members, &conclusions, &opinions)?;
        let statement = FinalStatement::new(*council.id(), kind, text, at);
        self.statements.save(&statement).await?;
        Ok(statement)
    }
}
