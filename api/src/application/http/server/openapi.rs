use utoipa::OpenApi;

use crate::application::http::{
    health::router::HealthApiDoc, prediction::router::PredictionApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriScan API",
        description = "Health classification of food items from their nutritional attributes"
    ),
    tags(
        (name = "prediction", description = "Model inference and risk annotation"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(PredictionApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
