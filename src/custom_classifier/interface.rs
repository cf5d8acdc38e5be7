use crate::classification::Classification;
use image::DynamicImage;
use std::sync::Arc;

pub trait ModelHandle: Send + Sync {
    fn predict(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}

pub trait ModelLoader: Send + Sync {
    /// Yields the handle for the asset at `path`, or `None` when the source
    /// resolves but contains no usable model.
    fn load(
        &self,
        path: &str,
    ) -> Result<Option<Arc<dyn ModelHandle>>, Box<dyn std::error::Error + Send + Sync>>;
}
