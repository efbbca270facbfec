//! EventPublisher port - Interface for publishing domain events.
//!
//! This port defines how the domain publishes events without knowing
//! about the underlying transport mechanism.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Events are delivered at-least-once (handlers may receive duplicates)
/// - Errors are propagated to the caller
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events, in order.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
