use axum::extract::State;
use nutriscan_core::domain::health::{entities::ModelHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

/// Readiness probe; fails while no classifier is loaded.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, description = "Model loaded", body = ModelHealthStatus),
        (status = 503, description = "Model unavailable", body = ModelHealthStatus)
    )
)]
pub async fn readiness(State(state): State<AppState>) -> Response<ModelHealthStatus> {
    let status = state.service.readiness().await;

    if status.is_ready() {
        Response::OK(status)
    } else {
        Response::ServiceUnavailable(status)
    }
}
