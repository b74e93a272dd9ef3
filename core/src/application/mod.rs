use crate::{
    domain::{
        common::{NutriScanConfig, entities::app_errors::CoreError, services::Service},
        prediction::{entities::ModelState, ports::Classifier},
    },
    infrastructure::model::XgbClassifier,
};

pub type NutriScanService = Service<XgbClassifier>;

/// Loads the classifier and builds the shared service.
///
/// A load failure is fatal only when `config.model.required` is set; otherwise the
/// service starts in the unavailable state and reports it through readiness.
pub async fn create_service(config: NutriScanConfig) -> Result<NutriScanService, CoreError> {
    let path = config.model.path.clone();

    let model = match XgbClassifier::from_path(&path) {
        Ok(classifier) => {
            let summary = classifier.summary();
            tracing::info!(
                path = %path.display(),
                features = summary.features,
                trees = summary.trees,
                "model loaded"
            );
            ModelState::Ready(classifier)
        }
        Err(e) if config.model.required => {
            tracing::error!(path = %path.display(), "failed to load model: {}", e);
            return Err(e);
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                "failed to load model, serving without it: {}",
                e
            );
            ModelState::unavailable(e.to_string())
        }
    };

    Ok(Service::new(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ModelConfig;

    fn config(path: &str, required: bool) -> NutriScanConfig {
        NutriScanConfig {
            model: ModelConfig {
                path: path.into(),
                required,
            },
        }
    }

    #[tokio::test]
    async fn test_missing_model_starts_unavailable() {
        let service = create_service(config("/nonexistent/model.json", false))
            .await
            .unwrap();
        assert!(!service.model().is_ready());
    }

    #[tokio::test]
    async fn test_missing_required_model_aborts() {
        let result = create_service(config("/nonexistent/model.json", true)).await;
        assert!(matches!(result, Err(CoreError::InvalidArtifact(_))));
    }

    #[tokio::test]
    async fn test_bundled_model_starts_ready() {
        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../models/health_nutrition_model.json"
        );
        let service = create_service(config(path, true)).await.unwrap();
        let summary = service.model().classifier().unwrap().summary();
        assert_eq!(summary.features, 18);
        assert_eq!(summary.trees, 3);
    }
}
