use picture_classifier::classification::Classification;
use picture_classifier::config::Config;
use picture_classifier::custom_classifier::classifier::CustomModelClassifier;
use picture_classifier::custom_classifier::impl_fake::{FakeModelLoader, RandomModelHandle};
use picture_classifier::logger::impl_console::LoggerConsole;
use picture_classifier::logger::interface::Logger;
use picture_classifier::pretrained_classifier::impl_fake::{FakeNetwork, FakeNetworkLoader};
use picture_classifier::pretrained_classifier::pipeline::PretrainedClassifier;
use picture_classifier::service_worker::impl_console::WorkerContextConsole;
use picture_classifier::service_worker::interface::LifecycleEvent;
use picture_classifier::service_worker::worker::ServiceWorker;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let worker = ServiceWorker::new(Arc::new(WorkerContextConsole::new(logger.clone())));
    worker.handle_event(LifecycleEvent::Install)?;
    worker.handle_event(LifecycleEvent::Activate)?;

    let image = sample_image();

    let custom = CustomModelClassifier::new(
        Arc::new(FakeModelLoader::yielding(Arc::new(RandomModelHandle::new()))),
        config.model_asset_path.clone(),
        logger.clone(),
    );
    let predictions = custom.classify(&image)?;
    logger.info(&format!("custom model predictions: {:?}", predictions))?;

    let pretrained = PretrainedClassifier::new(
        Arc::new(FakeNetworkLoader::yielding(Arc::new(FakeNetwork::returning(
            vec![Classification {
                label: "dog".to_string(),
                confidence: 0.8,
            }],
        )))),
        config.network_variant.clone(),
        config.input_resolution,
    );
    let predictions = pretrained.classify(&image)?;
    logger.info(&format!("pretrained network predictions: {:?}", predictions))?;

    Ok(())
}

fn sample_image() -> image::DynamicImage {
    let mut buffer = image::ImageBuffer::new(64, 48);
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        *pixel = image::Rgb([(x * 4) as u8, (y * 5) as u8, 128u8]);
    }
    image::DynamicImage::ImageRgb8(buffer)
}
