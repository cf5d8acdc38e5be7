use crate::classification::Classification;
use crate::error::ClassifierError;
use crate::pretrained_classifier::interface::{NetworkLoader, NetworkVariant, PretrainedNetwork};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tract_onnx::prelude::Tensor;

/// Always returns the same predictions.
pub struct FakeNetwork {
    classifications: Vec<Classification>,
}

impl FakeNetwork {
    pub fn returning(classifications: Vec<Classification>) -> Self {
        Self { classifications }
    }
}

impl PretrainedNetwork for FakeNetwork {
    fn classify(
        &self,
        _input: &Tensor,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.classifications.clone())
    }
}

enum FakeNetworkOutcome {
    Network(Arc<dyn PretrainedNetwork>),
    Fail(String),
}

/// Counts load invocations; optionally samples a watched flag at load time.
pub struct FakeNetworkLoader {
    outcome: FakeNetworkOutcome,
    load_count: AtomicUsize,
    watched_flag: Option<Arc<AtomicBool>>,
    observed_flag_values: Mutex<Vec<bool>>,
}

impl FakeNetworkLoader {
    pub fn yielding(network: Arc<dyn PretrainedNetwork>) -> Self {
        Self {
            outcome: FakeNetworkOutcome::Network(network),
            load_count: AtomicUsize::new(0),
            watched_flag: None,
            observed_flag_values: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: FakeNetworkOutcome::Fail(message.to_string()),
            load_count: AtomicUsize::new(0),
            watched_flag: None,
            observed_flag_values: Mutex::new(Vec::new()),
        }
    }

    pub fn watching(network: Arc<dyn PretrainedNetwork>, flag: Arc<AtomicBool>) -> Self {
        Self {
            outcome: FakeNetworkOutcome::Network(network),
            load_count: AtomicUsize::new(0),
            watched_flag: Some(flag),
            observed_flag_values: Mutex::new(Vec::new()),
        }
    }

    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }

    pub fn observed_flag_values(&self) -> Vec<bool> {
        self.observed_flag_values.lock().unwrap().clone()
    }
}

impl NetworkLoader for FakeNetworkLoader {
    fn load(
        &self,
        variant: &NetworkVariant,
    ) -> Result<Arc<dyn PretrainedNetwork>, Box<dyn std::error::Error + Send + Sync>> {
        self.load_count.fetch_add(1, Ordering::SeqCst);

        if let Some(flag) = &self.watched_flag {
            self.observed_flag_values
                .lock()
                .unwrap()
                .push(flag.load(Ordering::SeqCst));
        }

        match &self.outcome {
            FakeNetworkOutcome::Network(network) => Ok(network.clone()),
            FakeNetworkOutcome::Fail(message) => Err(ClassifierError::AssetLoad {
                path: format!("{}-{}", variant.architecture, variant.width_multiplier),
                reason: message.clone(),
            }
            .into()),
        }
    }
}
