use super::handlers::{
    liveness::{__path_liveness, liveness},
    readiness::{__path_readiness, readiness},
    root::{__path_root, root},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(root, liveness, readiness))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    let router = Router::new()
        .route(&format!("{}/", root_path), get(root))
        .route(&format!("{}/health/live", root_path), get(liveness))
        .route(&format!("{}/health/ready", root_path), get(readiness));

    // `/api` and `/api/` both reach the banner when served under a prefix.
    if root_path.is_empty() {
        router
    } else {
        router.route(root_path, get(root))
    }
}
