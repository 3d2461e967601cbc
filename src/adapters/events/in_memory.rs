//! In-memory event bus.
//!
//! Delivers each envelope to the handlers subscribed to its type, in
//! subscription order, and keeps a copy of everything published so callers
//! can inspect the stream.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::{EventHandler, EventPublisher, EventSubscriber};

/// Subscribing to this type receives every event.
pub const ALL_EVENTS: &str = "*";

/// In-memory event bus.
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.subscribe("motion.passed.v1", notifier);
/// // ... run commands ...
/// assert!(bus.has_event("statement.generated.v1"));
/// ```
pub struct InMemoryEventBus {
    handlers: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            published: RwLock::new(Vec::new()),
        }
    }

    /// Every envelope published so far, oldest first.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_type == event_type)
    }

    pub fn clear(&self) {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn handlers_for(&self, event_type: &str) -> Vec<Arc<dyn EventHandler>> {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let specific = handlers.get(event_type).into_iter().flatten();
        let wildcard = handlers.get(ALL_EVENTS).into_iter().flatten();
        specific.chain(wildcard).cloned().collect()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        debug!(
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            "publishing event"
        );
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());

        // Lock released before any handler is awaited.
        let handlers = self.handlers_for(&event.event_type);

        let mut errors = Vec::new();
        for handler in handlers {
            if let Err(e) = handler.handle(event.clone()).await {
                warn!(handler = handler.name(), error = %e, "event handler failed");
                errors.push(format!("{}: {}", handler.name(), e));
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Handler errors: {}", errors.join(", ")),
            ));
        }

        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

impl EventSubscriber for InMemoryEventBus {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
        self.subscribe_all(&[event_type], handler);
    }

    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>) {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        for event_type in event_types {
            handlers
                .entry(event_type.to_string())
                .or_default()
                .push(Arc::clone(&handler));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, aggregate_id, "Council", json!({}))
    }

    struct CountingHandler(Arc<AtomicUsize>);

    #[async_trait]
    impl EventHandler for CountingHandler {
        async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        fn name(&self) -> &'static str {
            "CountingHandler"
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl EventHandler for FailingHandler {
        async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::InternalError, "mailer offline"))
        }
        fn name(&self) -> &'static str {
            "FailingHandler"
        }
    }

    #[tokio::test]
    async fn publish_records_events_in_order() {
        let bus = InMemoryEventBus::new();

        bus.publish(envelope("council.created.v1", "c-1")).await.unwrap();
        bus.publish(envelope("motion.proposed.v1", "m-1")).await.unwrap();

        let types: Vec<String> = bus
            .published_events()
            .into_iter()
            .map(|e| e.event_type)
            .collect();
        assert_eq!(types, vec!["council.created.v1", "motion.proposed.v1"]);
        assert_eq!(bus.events_for_aggregate("c-1").len(), 1);
    }

    #[tokio::test]
    async fn handlers_receive_only_their_types() {
        let bus = InMemoryEventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        bus.subscribe_all(
            &["vote.cast.v1", "motion.passed.v1"],
            Arc::new(CountingHandler(count.clone())),
        );

        bus.publish(envelope("vote.cast.v1", "m-1")).await.unwrap();
        bus.publish(envelope("motion.passed.v1", "m-1")).await.unwrap();
        bus.publish(envelope("opinion.recorded.v1", "x-1")).await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn wildcard_subscription_sees_everything() {
        let bus = InMemoryEventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        bus.subscribe(ALL_EVENTS, Arc::new(CountingHandler(count.clone())));

        bus.publish_all(vec![
            envelope("council.created.v1", "c-1"),
            envelope("statement.generated.v1", "c-1"),
        ])
        .await
        .unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn handler_failure_is_reported_but_event_is_kept() {
        let bus = InMemoryEventBus::new();
        bus.subscribe("motion.passed.v1", Arc::new(FailingHandler));

        let err = bus
            .publish(envelope("motion.passed.v1", "m-1"))
            .await
            .unwrap_err();

        assert!(err.message.contains("FailingHandler"));
        assert!(bus.has_event("motion.passed.v1"));
    }

    #[tokio::test]
    async fn clear_empties_the_log() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope("x.y.v1", "a")).await.unwrap();
        bus.clear();
        assert_eq!(bus.event_count(), 0);
    }
}
