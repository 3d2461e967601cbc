//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `council` - Council lifecycle and membership
//! - `conclusion` - Conclusions, amendments, supersession and opinions
//! - `resolution` - Resolution motions, ballots and pass rules
//! - `statement` - Final statement synthesis

pub mod conclusion;
pub mod council;
pub mod foundation;
pub mod resolution;
pub mod statement;
