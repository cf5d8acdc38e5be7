mod classifier_test;
pub mod fixture;
