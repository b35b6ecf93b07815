//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use minigate_domain::error::MiniGateError;

/// JSON error body returned by the gateway.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`MiniGateError`] to an HTTP response with appropriate status code.
pub struct ApiError(MiniGateError);

impl From<MiniGateError> for ApiError {
    fn from(err: MiniGateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            MiniGateError::MalformedPayload(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            MiniGateError::Handler(err) => {
                tracing::error!(error = %err, "handler error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
