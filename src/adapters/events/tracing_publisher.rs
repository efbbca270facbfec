//! Event publisher that writes events to the tracing log.
//!
//! Used by the CLI, where no message broker is attached.

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        info!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            payload = %event.payload,
            "Domain event published"
        );
        Ok(())
    }
}
