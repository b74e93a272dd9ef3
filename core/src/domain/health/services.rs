use crate::domain::{
    common::services::Service,
    health::{
        entities::{ModelHealthStatus, ReadinessStatus},
        ports::HealthCheckService,
    },
    prediction::{entities::ModelState, ports::Classifier},
};

impl<C> HealthCheckService for Service<C>
where
    C: Classifier,
{
    async fn readiness(&self) -> ModelHealthStatus {
        match self.model() {
            ModelState::Ready(classifier) => {
                let summary = classifier.summary();
                ModelHealthStatus {
                    status: ReadinessStatus::Ready,
                    model_loaded: true,
                    reason: None,
                    features: Some(summary.features),
                    trees: Some(summary.trees),
                }
            }
            ModelState::Unavailable { reason } => ModelHealthStatus {
                status: ReadinessStatus::Unavailable,
                model_loaded: false,
                reason: Some(reason.clone()),
                features: None,
                trees: None,
            },
        }
    }
}
