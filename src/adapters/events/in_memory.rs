//! In-memory event bus implementation for testing.
//!
//! Captures published events for assertions. Delivery is synchronous and
//! deterministic.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus that records every published event.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
/// assert!(bus.has_event("ranking.computed.v1").await);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns events of a specific type.
    pub async fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published
            .read()
            .await
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Returns count of published events.
    pub async fn event_count(&self) -> usize {
        self.published.read().await.len()
    }

    /// Checks if a specific event type was published.
    pub async fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .await
            .iter()
            .any(|e| e.event_type == event_type)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.published.write().await.push(event);
        Ok(())
    }
}
