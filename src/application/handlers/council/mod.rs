//! Council lifecycle and membership handlers.

mod accept_invitation;
mod create_council;
mod decline_invitation;
mod get_council_view;
mod invite_members;
mod list_councils;

pub use accept_invitation::{AcceptInvitationCommand, AcceptInvitationHandler, InvitationResult};
pub use create_council::{CreateCouncilCommand, CreateCouncilHandler, CreateCouncilResult};
pub use decline_invitation::{DeclineInvitationCommand, DeclineInvitationHandler};
pub use get_council_view::{ConclusionView, CouncilView, GetCouncilViewHandler, GetCouncilViewQuery};
pub use invite_members::{InviteMembersCommand, InviteMembersHandler, InviteMembersResult};
pub use list_councils::{CouncilSummary, ListCouncilsHandler, ListCouncilsQuery};
