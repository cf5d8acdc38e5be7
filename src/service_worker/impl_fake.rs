use crate::service_worker::interface::WorkerContext;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Records how often each lifecycle action was taken.
pub struct WorkerContextFake {
    skip_waiting_count: AtomicUsize,
    claim_clients_count: AtomicUsize,
}

impl WorkerContextFake {
    pub fn new() -> Self {
        Self {
            skip_waiting_count: AtomicUsize::new(0),
            claim_clients_count: AtomicUsize::new(0),
        }
    }

    pub fn skip_waiting_count(&self) -> usize {
        self.skip_waiting_count.load(Ordering::SeqCst)
    }

    pub fn claim_clients_count(&self) -> usize {
        self.claim_clients_count.load(Ordering::SeqCst)
    }
}

impl WorkerContext for WorkerContextFake {
    fn skip_waiting(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.skip_waiting_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn claim_clients(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.claim_clients_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
