use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Service banner",
    responses(
        (status = 200, body = RootResponse)
    )
)]
pub async fn root() -> Response<RootResponse> {
    Response::OK(RootResponse {
        message: "NutriScan API is running!".to_string(),
    })
}
