//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the council domain.

mod command;
mod council_status;
mod errors;
mod events;
mod ids;
mod member_status;
mod motion_kind;
mod motion_status;
mod stance;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub use council_status::CouncilStatus;
pub(crate) use errors::require_min_chars;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{
    parse_usernames, ConclusionId, CouncilId, MotionId, OpinionId, Username, MAX_USERNAME_LENGTH,
    MIN_USERNAME_LENGTH,
};
pub use member_status::MemberStatus;
pub use motion_kind::MotionKind;
pub use motion_status::MotionStatus;
pub use stance::Stance;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
