//! Resolution motion handlers.

mod cast_vote;
mod propose_resolution;
mod withdraw_resolution;

pub use cast_vote::{CastVoteCommand, CastVoteHandler, CastVoteResult, VoteOutcome};
pub use propose_resolution::{
    ProposeResolutionCommand, ProposeResolutionHandler, ProposeResolutionResult,
};
pub use withdraw_resolution::{
    WithdrawResolutionCommand, WithdrawResolutionHandler, WithdrawResolutionResult,
};

use crate::domain::council::CouncilError;
use crate::domain::foundation::MotionId;
use crate::domain::resolution::ResolutionMotion;
use crate::ports::MotionRepository;

async fn load_motion(
    motions: &dyn MotionRepository,
    motion_id: &MotionId,
) -> Result<ResolutionMotion, CouncilError> {
    motions
        .find_by_id(motion_id)
        .await?
        .ok_or_else(|| CouncilError::not_found("Motion", motion_id))
}
