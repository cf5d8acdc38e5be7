use crate::pretrained_classifier::interface::NetworkVariant;

#[derive(Debug, Clone)]
pub struct Config {
    pub model_asset_path: String,
    pub network_variant: NetworkVariant,
    pub input_resolution: u32,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_asset_path: "model/model.onnx".to_string(),
            network_variant: NetworkVariant::mobilenet_v2(),
            input_resolution: 224,
            logger_timezone: mountain_standard_time(),
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
