use axum::extract::State;
use nutriscan_core::domain::prediction::{
    entities::{HealthLabel, PredictionOutcome},
    ports::PredictionService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    prediction::validators::PredictRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictResponse {
    #[serde(rename = "Prediction")]
    pub prediction: HealthLabel,
    #[serde(rename = "Health Risks")]
    pub health_risks: Vec<String>,
}

impl From<PredictionOutcome> for PredictResponse {
    fn from(outcome: PredictionOutcome) -> Self {
        Self {
            prediction: outcome.label,
            health_risks: outcome.risks.into_messages(),
        }
    }
}

#[utoipa::path(
    post,
    path = "/predict",
    tag = "prediction",
    summary = "Classify a food item",
    description = "Predicts whether a food item is healthy and lists the nutritional risk rules it triggers",
    request_body = PredictRequest,
    responses(
        (status = 200, body = PredictResponse),
        (status = 422, description = "Request body does not match the schema", body = ErrorBody),
        (status = 500, description = "Prediction failed", body = ErrorBody),
        (status = 503, description = "No model is loaded", body = ErrorBody)
    )
)]
pub async fn predict(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PredictRequest>,
) -> Result<Response<PredictResponse>, ApiError> {
    let outcome = state.service.predict(payload.into()).await.map_err(|e| {
        tracing::error!("Prediction failed: {}", e);
        ApiError::from(e)
    })?;

    tracing::debug!(
        prediction = %outcome.label,
        risks = outcome.risks.messages().len(),
        "prediction complete"
    );

    Ok(Response::OK(PredictResponse::from(outcome)))
}
