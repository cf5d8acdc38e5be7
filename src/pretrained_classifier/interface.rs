use crate::classification::Classification;
use std::sync::Arc;
use tract_onnx::prelude::Tensor;

/// Fixed hyperparameters of the pretrained network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkVariant {
    pub architecture: String,
    pub width_multiplier: f32,
}

impl NetworkVariant {
    pub fn mobilenet_v2() -> Self {
        Self {
            architecture: "mobilenet_v2".to_string(),
            width_multiplier: 1.0,
        }
    }
}

pub trait PretrainedNetwork: Send + Sync {
    fn classify(
        &self,
        input: &Tensor,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}

pub trait NetworkLoader: Send + Sync {
    fn load(
        &self,
        variant: &NetworkVariant,
    ) -> Result<Arc<dyn PretrainedNetwork>, Box<dyn std::error::Error + Send + Sync>>;
}
