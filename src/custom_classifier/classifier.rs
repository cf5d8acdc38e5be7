use crate::classification::Classification;
use crate::custom_classifier::interface::{ModelHandle, ModelLoader};
use crate::error::ClassifierError;
use crate::logger::interface::Logger;
use image::DynamicImage;
use std::sync::{Arc, Mutex};

/// Classifier backed by a single model asset loaded at most once.
///
/// The handle slot only moves from unset to set. The mutex serializes the
/// first load, so concurrent first calls cannot load the asset twice.
pub struct CustomModelClassifier {
    loader: Arc<dyn ModelLoader>,
    model: Mutex<Option<Arc<dyn ModelHandle>>>,
    asset_path: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl CustomModelClassifier {
    pub fn new(
        loader: Arc<dyn ModelLoader>,
        asset_path: String,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            loader,
            model: Mutex::new(None),
            asset_path,
            logger: logger.with_namespace("custom_classifier"),
        }
    }

    pub fn load(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut slot = self.model.lock().unwrap();
        self.load_into(&mut slot)
    }

    pub fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let model = {
            let mut slot = self.model.lock().unwrap();
            if slot.is_none() {
                self.load_into(&mut slot)?;
            }
            slot.clone()
        };

        let model = model.ok_or(ClassifierError::ModelNotLoaded)?;

        let predictions = model.predict(image)?;

        let labels: Vec<&str> = predictions.iter().map(|p| p.label.as_str()).collect();
        self.logger
            .info(&format!("predicted classes: {:?}", labels))?;

        Ok(predictions)
    }

    pub fn is_loaded(&self) -> bool {
        self.model.lock().unwrap().is_some()
    }

    fn load_into(
        &self,
        slot: &mut Option<Arc<dyn ModelHandle>>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let loaded = self.loader.load(&self.asset_path)?;
        if let Some(handle) = loaded {
            *slot = Some(handle);
            self.logger
                .info(&format!("model loaded from {}", self.asset_path))?;
        }
        Ok(())
    }
}
