use crate::logger::interface::Logger;
use crate::service_worker::interface::WorkerContext;
use std::sync::Arc;

pub struct WorkerContextConsole {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl WorkerContextConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("service_worker"),
        }
    }
}

impl WorkerContext for WorkerContextConsole {
    fn skip_waiting(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("skipping waiting phase")
    }

    fn claim_clients(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("claiming open clients")
    }
}
