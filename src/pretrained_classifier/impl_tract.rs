use crate::classification::Classification;
use crate::error::ClassifierError;
use crate::pretrained_classifier::interface::{NetworkLoader, NetworkVariant, PretrainedNetwork};
use std::sync::Arc;
use tract_onnx::prelude::*;

/// Resolves a network variant to an ONNX file under `models_dir`.
pub struct TractNetworkLoader {
    models_dir: String,
    labels: Vec<String>,
}

impl TractNetworkLoader {
    pub fn new(models_dir: String, labels: Vec<String>) -> Self {
        Self { models_dir, labels }
    }

    fn variant_path(&self, variant: &NetworkVariant) -> String {
        format!(
            "{}/{}-{}.onnx",
            self.models_dir, variant.architecture, variant.width_multiplier
        )
    }
}

impl NetworkLoader for TractNetworkLoader {
    fn load(
        &self,
        variant: &NetworkVariant,
    ) -> Result<Arc<dyn PretrainedNetwork>, Box<dyn std::error::Error + Send + Sync>> {
        let path = self.variant_path(variant);

        let model = tract_onnx::onnx()
            .model_for_path(&path)
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ClassifierError::AssetLoad {
                path,
                reason: e.to_string(),
            })?;

        Ok(Arc::new(TractPretrainedNetwork {
            model,
            labels: self.labels.clone(),
        }))
    }
}

pub struct TractPretrainedNetwork {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
}

impl TractPretrainedNetwork {
    fn label_for(&self, class_idx: usize) -> String {
        self.labels
            .get(class_idx)
            .cloned()
            .unwrap_or_else(|| format!("class_{}", class_idx))
    }
}

impl PretrainedNetwork for TractPretrainedNetwork {
    fn classify(
        &self,
        input: &Tensor,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        // The network expects a batch axis in front of [height, width, channel].
        let batched = input
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?
            .to_owned()
            .insert_axis(tract_ndarray::Axis(0))
            .into_tensor();

        let outputs = self
            .model
            .run(tvec!(batched.into_tvalue()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let probabilities = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let mut ranked: Vec<(usize, f32)> = probabilities
            .iter()
            .enumerate()
            .map(|(class_idx, probability)| (class_idx, *probability))
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        ranked.truncate(3);

        Ok(ranked
            .into_iter()
            .map(|(class_idx, probability)| Classification {
                label: self.label_for(class_idx),
                confidence: probability,
            })
            .collect())
    }
}
