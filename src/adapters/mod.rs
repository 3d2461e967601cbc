//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory repositories for every persistence port
//! - `events` - In-process event bus

pub mod events;
pub mod memory;

pub use events::InMemoryEventBus;
pub use memory::{
    InMemoryConclusionRepository, InMemoryCouncilRepository, InMemoryMemberRepository,
    InMemoryMotionRepository, InMemoryOpinionRepository, InMemoryStatementRepository,
};
