mod artifact;
pub mod xgboost;

pub use xgboost::XgbClassifier;
