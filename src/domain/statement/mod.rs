//! Statement synthesis domain.
//!
//! Turns a terminated council into its joint statement. Everything here is
//! pure; persistence of the result happens in the resolution workflow.

mod events;
mod final_statement;
mod prose;
mod synthesizer;

pub use events::StatementGenerated;
pub use final_statement::FinalStatement;
pub use prose::join_list;
pub use synthesizer::{classify, synthesize, Classification, Majoritarian};
