use crate::service_worker::interface::{LifecycleEvent, WorkerContext};
use std::sync::Arc;

/// Lifecycle stub: activates immediately and takes over its scope.
/// No precaching, no fetch interception, no versioning.
pub struct ServiceWorker {
    context: Arc<dyn WorkerContext>,
}

impl ServiceWorker {
    pub fn new(context: Arc<dyn WorkerContext>) -> Self {
        Self { context }
    }

    pub fn handle_event(
        &self,
        event: LifecycleEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match event {
            LifecycleEvent::Install => self.context.skip_waiting(),
            LifecycleEvent::Activate => self.context.claim_clients(),
        }
    }
}
