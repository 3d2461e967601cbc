//! Conclusion, amendment and opinion handlers.

mod propose_amendment;
mod propose_conclusion;
mod record_opinion;

pub use propose_amendment::{ProposeAmendmentCommand, ProposeAmendmentHandler};
pub use propose_conclusion::{
    ProposeConclusionCommand, ProposeConclusionHandler, ProposeConclusionResult,
};
pub use record_opinion::{RecordOpinionCommand, RecordOpinionHandler, RecordOpinionResult};
