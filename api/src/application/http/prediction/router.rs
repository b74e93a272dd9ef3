use super::handlers::predict::{__path_predict, predict};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(predict))]
pub struct PredictionApiDoc;

pub fn prediction_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/predict", root_path), post(predict))
}
