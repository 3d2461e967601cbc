//! Council domain module.
//!
//! Council lifecycle and membership: convening, invitations, acceptance and
//! the single terminal transition driven by a passed motion.
//!
//! # Events
//!
//! - `CouncilCreated` - Published when a council is convened
//! - `MembersInvited` - Published when new usernames are invited
//! - `InvitationAccepted` - Published when a member joins
//! - `InvitationDeclined` - Published when a member declines or leaves
//! - `CouncilTerminated` - Published when a motion resolves or closes the council

mod aggregate;
mod errors;
mod events;
mod member;

pub use aggregate::{Council, MIN_ISSUE_LENGTH};
pub use errors::CouncilError;
pub use events::{
    CouncilCreated, CouncilTerminated, InvitationAccepted, InvitationDeclined, MembersInvited,
};
pub use member::Member;
