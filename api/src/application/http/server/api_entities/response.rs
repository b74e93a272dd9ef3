use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

/// Successful (or deliberately degraded) JSON response with an explicit status.
#[derive(Debug)]
pub enum Response<T: Serialize> {
    OK(T),
    ServiceUnavailable(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::ServiceUnavailable(data) => {
                (StatusCode::SERVICE_UNAVAILABLE, Json(data)).into_response()
            }
        }
    }
}
