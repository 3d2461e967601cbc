//! Conclusion domain module.
//!
//! The conclusion ledger (proposals, amendments and their supersession) and
//! the opinion store keyed by (conclusion, member).
//!
//! # Events
//!
//! - `ConclusionProposed` - Published for conclusions and amendments
//! - `OpinionRecorded` - Published on every opinion upsert
//! - `ConclusionSuperseded` - Published when an amendment replaces its original

mod aggregate;
mod events;
mod opinion;
mod supersession;
mod tally;

pub use aggregate::{Conclusion, MIN_CONCLUSION_LENGTH};
pub use events::{ConclusionProposed, ConclusionSuperseded, OpinionRecorded};
pub use opinion::{Opinion, MIN_REASONING_LENGTH};
pub use supersession::{apply_supersession, Supersession};
pub use tally::OpinionTally;
