//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//! Every write acquires the council's lock before loading state and
//! publishes its events only after the lock is released.

pub mod conclusion;
pub mod council;
pub mod resolution;
pub mod statement;

mod support;

pub use conclusion::{
    ProposeAmendmentCommand, ProposeAmendmentHandler, ProposeConclusionCommand,
    ProposeConclusionHandler, ProposeConclusionResult, RecordOpinionCommand, RecordOpinionHandler,
    RecordOpinionResult,
};
pub use council::{
    AcceptInvitationCommand, AcceptInvitationHandler, ConclusionView, CouncilSummary, CouncilView,
    CreateCouncilCommand, CreateCouncilHandler, CreateCouncilResult, DeclineInvitationCommand,
    DeclineInvitationHandler, GetCouncilViewHandler, GetCouncilViewQuery, InvitationResult,
    InviteMembersCommand, InviteMembersHandler, InviteMembersResult, ListCouncilsHandler,
    ListCouncilsQuery,
};
pub use resolution::{
    CastVoteCommand, CastVoteHandler, CastVoteResult, ProposeResolutionCommand,
    ProposeResolutionHandler, ProposeResolutionResult, VoteOutcome, WithdrawResolutionCommand,
    WithdrawResolutionHandler, WithdrawResolutionResult,
};
pub use statement::{GetFinalStatementHandler, GetFinalStatementQuery};
