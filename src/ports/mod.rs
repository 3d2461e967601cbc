//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `CouncilRepository` - Council aggregates
//! - `MemberRepository` - Membership rows and the live quorum count
//! - `ConclusionRepository` - Conclusions and amendments
//! - `OpinionRepository` - Opinions, upserted per (conclusion, member)
//! - `MotionRepository` - Resolution motions, votes upserted per member
//! - `StatementRepository` - Write-once final statements
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events

mod conclusion_repository;
mod council_repository;
mod event_publisher;
mod event_subscriber;
mod member_repository;
mod motion_repository;
mod opinion_repository;
mod statement_repository;

pub use conclusion_repository::ConclusionRepository;
pub use council_repository::CouncilRepository;
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use member_repository::MemberRepository;
pub use motion_repository::{MotionRepository, VoteUpsert};
pub use opinion_repository::{OpinionRepository, OpinionUpsert};
pub use statement_repository::StatementRepository;
