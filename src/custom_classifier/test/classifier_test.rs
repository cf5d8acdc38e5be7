use crate::classification::Classification;
use crate::custom_classifier::impl_fake::FakeModelLoader;
use crate::custom_classifier::test::fixture::Fixture;
use crate::error::ClassifierError;
use image::{DynamicImage, ImageBuffer, Rgb};
use std::sync::Arc;

fn cat_prediction() -> Vec<Classification> {
    vec![Classification {
        label: "cat".to_string(),
        confidence: 0.9,
    }]
}

fn any_image() -> DynamicImage {
    let mut img = ImageBuffer::new(32, 32);
    for pixel in img.pixels_mut() {
        *pixel = Rgb([200, 180, 160]);
    }
    DynamicImage::ImageRgb8(img)
}

#[test]
fn test_first_classify_loads_exactly_once() {
    let f = Fixture::returning(cat_prediction());

    assert!(!f.classifier.is_loaded());

    f.classifier.classify(&any_image()).unwrap();
    f.classifier.classify(&any_image()).unwrap();
    f.classifier.classify(&any_image()).unwrap();

    assert_eq!(f.loader.load_count(), 1);
    assert!(f.classifier.is_loaded());
}

#[test]
fn test_explicit_load_is_reused_by_classify() {
    let f = Fixture::returning(cat_prediction());

    f.classifier.load().unwrap();
    assert!(f.classifier.is_loaded());

    f.classifier.classify(&any_image()).unwrap();

    assert_eq!(f.loader.load_count(), 1);
}

#[test]
fn test_classify_returns_stub_predictions_unchanged() {
    let f = Fixture::returning(cat_prediction());

    let predictions = f.classifier.classify(&any_image()).unwrap();

    assert_eq!(predictions, cat_prediction());
}

#[test]
fn test_classify_logs_predicted_classes() {
    let f = Fixture::returning(cat_prediction());

    f.classifier.classify(&any_image()).unwrap();

    assert!(f.logger.any_message_contains("predicted classes"));
    assert!(f.logger.any_message_contains("cat"));
}

#[test]
fn test_load_logs_confirmation() {
    let f = Fixture::returning(cat_prediction());

    f.classifier.load().unwrap();

    assert!(f.logger.any_message_contains("model loaded from model/model.onnx"));
}

#[test]
fn test_load_failure_propagates_from_classify() {
    let f = Fixture::with_loader(Arc::new(FakeModelLoader::failing("asset missing")));

    let err = f.classifier.classify(&any_image()).unwrap_err();

    let err = err.downcast_ref::<ClassifierError>().unwrap();
    assert!(matches!(err, ClassifierError::AssetLoad { .. }));
    assert!(err.to_string().contains("asset missing"));
    assert!(!f.classifier.is_loaded());
}

#[test]
fn test_empty_load_yields_model_not_loaded() {
    let f = Fixture::with_loader(Arc::new(FakeModelLoader::empty()));

    let err = f.classifier.classify(&any_image()).unwrap_err();

    let err = err.downcast_ref::<ClassifierError>().unwrap();
    assert!(matches!(err, ClassifierError::ModelNotLoaded));
    assert_eq!(f.loader.load_count(), 1);
    assert!(!f.classifier.is_loaded());
}

#[test]
fn test_failed_load_is_retried_by_next_classify() {
    let f = Fixture::with_loader(Arc::new(FakeModelLoader::failing("asset missing")));

    let _ = f.classifier.classify(&any_image());
    let _ = f.classifier.classify(&any_image());

    assert_eq!(f.loader.load_count(), 2);
}
