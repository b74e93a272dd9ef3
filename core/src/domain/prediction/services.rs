use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    nutrition::{entities::NutritionInput, feature_row::ModelFeatureRow, risk::assess_risks},
    prediction::{
        entities::{HealthLabel, PredictionOutcome},
        ports::{Classifier, PredictionService},
    },
};

impl<C> PredictionService for Service<C>
where
    C: Classifier,
{
    async fn predict(&self, input: NutritionInput) -> Result<PredictionOutcome, CoreError> {
        let classifier = self.model.classifier()?;

        let row = ModelFeatureRow::from(&input);
        tracing::debug!(columns = ?row.columns(), "mapped input to feature row");

        let raw = classifier.predict(&row)?;
        tracing::debug!(raw, "raw prediction");

        Ok(PredictionOutcome {
            label: HealthLabel::from_raw(raw),
            risks: assess_risks(&input),
        })
    }
}
