use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to load model asset {path}: {reason}")]
    AssetLoad { path: String, reason: String },

    #[error("model not loaded")]
    ModelNotLoaded,

    #[error("inference failed: {0}")]
    Inference(String),
}
