use crate::classification::Classification;
use crate::pretrained_classifier::interface::{NetworkLoader, NetworkVariant, PretrainedNetwork};
use crate::pretrained_classifier::tensor::image_to_input_tensor;
use image::DynamicImage;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tract_onnx::prelude::Tensor;

/// Stateless-per-call classifier: load network, preprocess, infer.
///
/// Nothing is cached between calls; every classification pays the full
/// network-load cost again.
pub struct PretrainedClassifier {
    loader: Arc<dyn NetworkLoader>,
    variant: NetworkVariant,
    resolution: u32,
    loading: Arc<AtomicBool>,
}

impl PretrainedClassifier {
    pub fn new(loader: Arc<dyn NetworkLoader>, variant: NetworkVariant, resolution: u32) -> Self {
        Self::with_loading_flag(loader, variant, resolution, Arc::new(AtomicBool::new(false)))
    }

    /// Shares the in-progress flag with an outside observer.
    pub fn with_loading_flag(
        loader: Arc<dyn NetworkLoader>,
        variant: NetworkVariant,
        resolution: u32,
        loading: Arc<AtomicBool>,
    ) -> Self {
        Self {
            loader,
            variant,
            resolution,
            loading,
        }
    }

    pub fn load_model(
        &self,
    ) -> Result<Arc<dyn PretrainedNetwork>, Box<dyn std::error::Error + Send + Sync>> {
        self.loader.load(&self.variant)
    }

    pub fn preprocess_image(&self, image: &DynamicImage) -> Tensor {
        image_to_input_tensor(image, self.resolution)
    }

    pub fn classify_image(
        &self,
        model: &dyn PretrainedNetwork,
        input: &Tensor,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        model.classify(input)
    }

    pub fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.loading.store(true, Ordering::SeqCst);

        let model = self.load_model()?;
        let input = self.preprocess_image(image);
        let predictions = self.classify_image(model.as_ref(), &input)?;

        // The flag clears only on completion; a failed call leaves it set.
        self.loading.store(false, Ordering::SeqCst);

        Ok(predictions)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}
