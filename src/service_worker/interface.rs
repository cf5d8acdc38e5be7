#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Install,
    Activate,
}

pub trait WorkerContext: Send + Sync {
    fn skip_waiting(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn claim_clients(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
