//! Final statement queries.

mod get_final_statement;

pub use get_final_statement::{GetFinalStatementHandler, GetFinalStatementQuery};
