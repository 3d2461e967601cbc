//! EventSubscriber port - push notification of council changes.
//!
//! Callers that would otherwise poll a council view register an
//! `EventHandler` for the event types they care about.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// Handlers should be idempotent; delivery is at-least-once.
///
/// ```ignore
/// struct StatementMailer;
///
/// #[async_trait]
/// impl EventHandler for StatementMailer {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         let generated: StatementGenerated = event.payload_as()?;
///         // notify members...
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "StatementMailer"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events by type (e.g. `"motion.passed.v1"`).
pub trait EventSubscriber: Send + Sync {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// Publisher and subscriber in one.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_ports_are_object_safe() {
        fn _handler(_h: &dyn EventHandler) {}
        fn _subscriber(_s: &dyn EventSubscriber) {}
    }
}
