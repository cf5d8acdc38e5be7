use crate::classification::Classification;
use crate::custom_classifier::interface::{ModelHandle, ModelLoader};
use crate::error::ClassifierError;
use image::DynamicImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct TractModelLoader {
    input_size: u32,
    labels: Vec<String>,
}

impl TractModelLoader {
    pub fn new(input_size: u32, labels: Vec<String>) -> Self {
        Self { input_size, labels }
    }
}

impl ModelLoader for TractModelLoader {
    fn load(
        &self,
        path: &str,
    ) -> Result<Option<Arc<dyn ModelHandle>>, Box<dyn std::error::Error + Send + Sync>> {
        let model = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ClassifierError::AssetLoad {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Some(Arc::new(TractModelHandle {
            model,
            input_size: self.input_size,
            labels: self.labels.clone(),
        })))
    }
}

pub struct TractModelHandle {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    input_size: u32,
    labels: Vec<String>,
}

impl TractModelHandle {
    fn to_input_tensor(&self, image: &DynamicImage) -> Tensor {
        let size = self.input_size;
        let resized = image.resize_exact(size, size, image::imageops::FilterType::Triangle);
        let rgb = resized.to_rgb8();

        tract_ndarray::Array4::from_shape_fn(
            (1, 3, size as usize, size as usize),
            |(_, c, y, x)| rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0,
        )
        .into_tensor()
    }

    fn label_for(&self, class_idx: usize) -> String {
        self.labels
            .get(class_idx)
            .cloned()
            .unwrap_or_else(|| format!("class_{}", class_idx))
    }
}

impl ModelHandle for TractModelHandle {
    fn predict(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let input = self.to_input_tensor(image);

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let scores = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let mut predictions: Vec<(usize, f32)> = scores
            .iter()
            .enumerate()
            .map(|(class_idx, score)| (class_idx, *score))
            .filter(|(_, score)| *score > 0.1) // Only consider reasonable confidence
            .collect();

        predictions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        predictions.truncate(5);

        Ok(predictions
            .into_iter()
            .map(|(class_idx, confidence)| Classification {
                label: self.label_for(class_idx),
                confidence,
            })
            .collect())
    }
}
