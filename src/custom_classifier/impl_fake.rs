use crate::classification::Classification;
use crate::custom_classifier::interface::{ModelHandle, ModelLoader};
use crate::error::ClassifierError;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Always returns the same predictions.
pub struct FakeModelHandle {
    classifications: Vec<Classification>,
}

impl FakeModelHandle {
    pub fn returning(classifications: Vec<Classification>) -> Self {
        Self { classifications }
    }
}

impl ModelHandle for FakeModelHandle {
    fn predict(
        &self,
        _image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.classifications.clone())
    }
}

/// Picks a random label with a random confidence.
pub struct RandomModelHandle {}

impl RandomModelHandle {
    pub fn new() -> Self {
        Self {}
    }
}

impl ModelHandle for RandomModelHandle {
    fn predict(
        &self,
        _image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let objects = vec![
            "dog", "cat", "person", "car", "chair", "table", "bird", "tree", "bicycle", "book",
            "laptop", "phone", "cup", "bottle", "keyboard", "mouse", "plant", "clock",
        ];

        let mut rng = rand::rng();

        let index_dist = Uniform::new(0, objects.len())?;

        let confidence_dist = Uniform::new(0.0, 1.0)?;

        let classification = Classification {
            label: objects[index_dist.sample(&mut rng)].to_string(),
            confidence: confidence_dist.sample(&mut rng),
        };

        Ok(vec![classification])
    }
}

enum FakeLoadOutcome {
    Handle(Arc<dyn ModelHandle>),
    Empty,
    Fail(String),
}

/// Counts load invocations so tests can assert how often the asset was read.
pub struct FakeModelLoader {
    outcome: FakeLoadOutcome,
    load_count: AtomicUsize,
}

impl FakeModelLoader {
    pub fn yielding(handle: Arc<dyn ModelHandle>) -> Self {
        Self {
            outcome: FakeLoadOutcome::Handle(handle),
            load_count: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            outcome: FakeLoadOutcome::Empty,
            load_count: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: FakeLoadOutcome::Fail(message.to_string()),
            load_count: AtomicUsize::new(0),
        }
    }

    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }
}

impl ModelLoader for FakeModelLoader {
    fn load(
        &self,
        path: &str,
    ) -> Result<Option<Arc<dyn ModelHandle>>, Box<dyn std::error::Error + Send + Sync>> {
        self.load_count.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            FakeLoadOutcome::Handle(handle) => Ok(Some(handle.clone())),
            FakeLoadOutcome::Empty => Ok(None),
            FakeLoadOutcome::Fail(message) => Err(ClassifierError::AssetLoad {
                path: path.to_string(),
                reason: message.clone(),
            }
            .into()),
        }
    }
}
