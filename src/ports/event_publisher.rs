//! EventPublisher port - Interface for publishing domain events.
//!
//! Handlers publish after the council's critical section is released, so a
//! failing publisher never rolls back a committed state change.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// ```ignore
/// let envelope = event.to_envelope()?.with_command_metadata(&metadata);
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish events in order. Adapters without atomic batches publish
    /// sequentially and stop at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}
