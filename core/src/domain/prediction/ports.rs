use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{entities::NutritionInput, feature_row::ModelFeatureRow},
    prediction::entities::{ModelSummary, PredictionOutcome},
};

/// Pre-trained binary classifier. Implementations must be immutable once built.
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync + 'static {
    /// Returns the raw class label for a single feature row.
    fn predict(&self, row: &ModelFeatureRow) -> Result<u8, CoreError>;

    fn summary(&self) -> ModelSummary;
}

pub trait PredictionService: Send + Sync {
    fn predict(
        &self,
        input: NutritionInput,
    ) -> impl Future<Output = Result<PredictionOutcome, CoreError>> + Send;
}
