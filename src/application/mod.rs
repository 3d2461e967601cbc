//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

mod council_locks;
mod engine;
pub mod handlers;

pub use council_locks::{CouncilGuard, CouncilLocks};
pub use engine::{CouncilEngine, EnginePorts};
pub use handlers::*;
