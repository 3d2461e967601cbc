//! CouncilEngine - a single entry point over every council handler.

use std::sync::Arc;

use crate::adapters::{
    InMemoryConclusionRepository, InMemoryCouncilRepository, InMemoryEventBus,
    InMemoryMemberRepository, InMemoryMotionRepository, InMemoryOpinionRepository,
    InMemoryStatementRepository,
};
use crate::config::EngineConfig;
use crate::domain::council::CouncilError;
use crate::domain::foundation::CommandMetadata;
use crate::domain::statement::FinalStatement;
use crate::ports::{
    ConclusionRepository, CouncilRepository, EventPublisher, MemberRepository, MotionRepository,
    OpinionRepository, StatementRepository,
};

use super::handlers::*;
use super::CouncilLocks;

/// The ports the engine runs against.
#[derive(Clone)]
pub struct EnginePorts {
    pub councils: Arc<dyn CouncilRepository>,
    pub members: Arc<dyn MemberRepository>,
    pub conclusions: Arc<dyn ConclusionRepository>,
    pub opinions: Arc<dyn OpinionRepository>,
    pub motions: Arc<dyn MotionRepository>,
    pub statements: Arc<dyn StatementRepository>,
    pub event_publisher: Arc<dyn EventPublisher>,
}

impl EnginePorts {
    /// Fresh in-memory adapters. The bus is returned separately so callers
    /// can subscribe to it or inspect what was published.
    pub fn in_memory() -> (Self, Arc<InMemoryEventBus>) {
        let bus = Arc::new(InMemoryEventBus::new());
        let ports = Self {
            councils: Arc::new(InMemoryCouncilRepository::new()),
            members: Arc::new(InMemoryMemberRepository::new()),
            conclusions: Arc::new(InMemoryConclusionRepository::new()),
            opinions: Arc::new(InMemoryOpinionRepository::new()),
            motions: Arc::new(InMemoryMotionRepository::new()),
            statements: Arc::new(InMemoryStatementRepository::new()),
            event_publisher: bus.clone(),
        };
        (ports, bus)
    }
}

/// Every council operation wired over one set of ports and one lock table.
pub struct CouncilEngine {
    create_council: CreateCouncilHandler,
    list_councils: ListCouncilsHandler,
    invite_members: InviteMembersHandler,
    accept_invitation: AcceptInvitationHandler,
    decline_invitation: DeclineInvitationHandler,
    get_council_view: GetCouncilViewHandler,
    propose_conclusion: ProposeConclusionHandler,
    propose_amendment: ProposeAmendmentHandler,
    record_opinion: RecordOpinionHandler,
    propose_resolution: ProposeResolutionHandler,
    cast_vote: CastVoteHandler,
    withdraw_resolution: WithdrawResolutionHandler,
    get_final_statement: GetFinalStatementHandler,
}

impl CouncilEngine {
    pub fn new(ports: EnginePorts, config: EngineConfig) -> Self {
        let locks = Arc::new(CouncilLocks::new());
        let EnginePorts {
            councils,
            members,
            conclusions,
            opinions,
            motions,
            statements,
            event_publisher,
        } = ports;

        Self {
            create_council: CreateCouncilHandler::new(
                councils.clone(),
                members.clone(),
                event_publisher.clone(),
                config,
            ),
            list_councils: ListCouncilsHandler::new(councils.clone(), members.clone()),
            invite_members: InviteMembersHandler::new(
                councils.clone(),
                members.clone(),
                event_publisher.clone(),
                locks.clone(),
                config,
            ),
            accept_invitation: AcceptInvitationHandler::new(
                councils.clone(),
                members.clone(),
                event_publisher.clone(),
                locks.clone(),
            ),
            decline_invitation: DeclineInvitationHandler::new(
                councils.clone(),
                members.clone(),
                event_publisher.clone(),
                locks.clone(),
            ),
            get_council_view: GetCouncilViewHandler::new(
                councils.clone(),
                members.clone(),
                conclusions.clone(),
                opinions.clone(),
                motions.clone(),
                statements.clone(),
            ),
            propose_conclusion: ProposeConclusionHandler::new(
                councils.clone(),
                members.clone(),
                conclusions.clone(),
                event_publisher.clone(),
                locks.clone(),
                config,
            ),
            propose_amendment: ProposeAmendmentHandler::new(
                councils.clone(),
                members.clone(),
                conclusions.clone(),
                event_publisher.clone(),
                locks.clone(),
                config,
            ),
            record_opinion: RecordOpinionHandler::new(
                councils.clone(),
                members.clone(),
                conclusions.clone(),
                opinions.clone(),
                event_publisher.clone(),
                locks.clone(),
            ),
            propose_resolution: ProposeResolutionHandler::new(
                councils.clone(),
                members.clone(),
                motions.clone(),
                event_publisher.clone(),
                locks.clone(),
            ),
            cast_vote: CastVoteHandler::new(
                councils.clone(),
                members.clone(),
                conclusions,
                opinions,
                motions.clone(),
                statements.clone(),
                event_publisher.clone(),
                locks.clone(),
            ),
            withdraw_resolution: WithdrawResolutionHandler::new(
                councils.clone(),
                motions,
                event_publisher,
                locks,
            ),
            get_final_statement: GetFinalStatementHandler::new(councils, members, statements),
        }
    }

    /// Engine over fresh in-memory adapters, plus the bus it publishes to.
    pub fn in_memory(config: EngineConfig) -> (Self, Arc<InMemoryEventBus>) {
        let (ports, bus) = EnginePorts::in_memory();
        (Self::new(ports, config), bus)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Council lifecycle and membership
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn create_council(
        &self,
        cmd: CreateCouncilCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateCouncilResult, CouncilError> {
        self.create_council.handle(cmd, metadata).await
    }

    pub async fn list_councils(
        &self,
        query: ListCouncilsQuery,
        metadata: CommandMetadata,
    ) -> Result<Vec<CouncilSummary>, CouncilError> {
        self.list_councils.handle(query, metadata).await
    }

    pub async fn invite_members(
        &self,
        cmd: InviteMembersCommand,
        metadata: CommandMetadata,
    ) -> Result<InviteMembersResult, CouncilError> {
        self.invite_members.handle(cmd, metadata).await
    }

    pub async fn accept_invitation(
        &self,
        cmd: AcceptInvitationCommand,
        metadata: CommandMetadata,
    ) -> Result<InvitationResult, CouncilError> {
        self.accept_invitation.handle(cmd, metadata).await
    }

    pub async fn decline_invitation(
        &self,
        cmd: DeclineInvitationCommand,
        metadata: CommandMetadata,
    ) -> Result<InvitationResult, CouncilError> {
        self.decline_invitation.handle(cmd, metadata).await
    }

    pub async fn get_council_view(
        &self,
        query: GetCouncilViewQuery,
        metadata: CommandMetadata,
    ) -> Result<CouncilView, CouncilError> {
        self.get_council_view.handle(query, metadata).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conclusions and opinions
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn propose_conclusion(
        &self,
        cmd: ProposeConclusionCommand,
        metadata: CommandMetadata,
    ) -> Result<ProposeConclusionResult, CouncilError> {
        self.propose_conclusion.handle(cmd, metadata).await
    }

    pub async fn propose_amendment(
        &self,
        cmd: ProposeAmendmentCommand,
        metadata: CommandMetadata,
    ) -> Result<ProposeConclusionResult, CouncilError> {
        self.propose_amendment.handle(cmd, metadata).await
    }

    pub async fn record_opinion(
        &self,
        cmd: RecordOpinionCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordOpinionResult, CouncilError> {
        self.record_opinion.handle(cmd, metadata).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn propose_resolution(
        &self,
        cmd: ProposeResolutionCommand,
        metadata: CommandMetadata,
    ) -> Result<ProposeResolutionResult, CouncilError> {
        self.propose_resolution.handle(cmd, metadata).await
    }

    pub async fn cast_vote(
        &self,
        cmd: CastVoteCommand,
        metadata: CommandMetadata,
    ) -> Result<CastVoteResult, CouncilError> {
        self.cast_vote.handle(cmd, metadata).await
    }

    pub async fn withdraw_resolution(
        &self,
        cmd: WithdrawResolutionCommand,
        metadata: CommandMetadata,
    ) -> Result<WithdrawResolutionResult, CouncilError> {
        self.withdraw_resolution.handle(cmd, metadata).await
    }

    pub async fn get_final_statement(
        &self,
        query: GetFinalStatementQuery,
        metadata: CommandMetadata,
    ) -> Result<FinalStatement, CouncilError> {
        self.get_final_statement.handle(query, metadata).await
    }
}
