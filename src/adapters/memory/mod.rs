//! In-memory persistence adapters.
//!
//! One adapter per repository port, each backed by `tokio::sync::RwLock`
//! over a map. Cloning an adapter shares its storage.

mod conclusion_repository;
mod council_repository;
mod member_repository;
mod motion_repository;
mod opinion_repository;
mod statement_repository;

pub use conclusion_repository::InMemoryConclusionRepository;
pub use council_repository::InMemoryCouncilRepository;
pub use member_repository::InMemoryMemberRepository;
pub use motion_repository::InMemoryMotionRepository;
pub use opinion_repository::InMemoryOpinionRepository;
pub use statement_repository::InMemoryStatementRepository;
