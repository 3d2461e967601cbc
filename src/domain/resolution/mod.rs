//! Resolution workflow domain.
//!
//! Motions to resolve (unanimous) or close (strict majority) a council, their
//! ballots, and the pass rules evaluated against the live quorum.
//!
//! # Events
//!
//! - `MotionProposed`
//! - `VoteCast`
//! - `MotionPassed`
//! - `MotionWithdrawn`

mod events;
mod motion;
mod threshold;

pub use events::{MotionPassed, MotionProposed, MotionWithdrawn, VoteCast};
pub use motion::ResolutionMotion;
pub use threshold::PassRule;
