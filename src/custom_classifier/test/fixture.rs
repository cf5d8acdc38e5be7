use crate::classification::Classification;
use crate::custom_classifier::classifier::CustomModelClassifier;
use crate::custom_classifier::impl_fake::{FakeModelHandle, FakeModelLoader};
use crate::logger::impl_fake::LoggerFake;
use std::sync::Arc;

pub struct Fixture {
    pub loader: Arc<FakeModelLoader>,
    pub logger: Arc<LoggerFake>,
    pub classifier: CustomModelClassifier,
}

impl Fixture {
    pub fn with_loader(loader: Arc<FakeModelLoader>) -> Self {
        let logger = Arc::new(LoggerFake::new());
        let classifier = CustomModelClassifier::new(
            loader.clone(),
            "model/model.onnx".to_string(),
            logger.clone(),
        );

        Self {
            loader,
            logger,
            classifier,
        }
    }

    pub fn returning(classifications: Vec<Classification>) -> Self {
        Self::with_loader(Arc::new(FakeModelLoader::yielding(Arc::new(
            FakeModelHandle::returning(classifications),
        ))))
    }
}
