//! The invocation endpoint.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use minigate_app::ports::Handler;
use minigate_domain::error::MiniGateError;
use minigate_domain::payload::Payload;
use minigate_domain::response::ResponseMode;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the invoke endpoint.
pub enum InvokeResponse {
    /// Handler result serialized as JSON (`application/json`).
    Json(Json<serde_json::Value>),
    /// Handler result written through as plain text.
    Raw(String),
}

impl IntoResponse for InvokeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Json(json) => json.into_response(),
            Self::Raw(text) => text.into_response(),
        }
    }
}

/// `ANY /`
///
/// Decodes the optional JSON body, invokes the handler with it, and shapes
/// the result according to the active response mode. An empty body decodes
/// to the empty mapping; a malformed body is rejected before the handler
/// runs.
pub async fn invoke<H>(
    State(state): State<AppState<H>>,
    body: Bytes,
) -> Result<InvokeResponse, ApiError>
where
    H: Handler + Send + Sync + 'static,
{
    let payload = if body.is_empty() {
        Payload::empty()
    } else {
        Payload::from_slice(&body)
            .map_err(|err| ApiError::from(MiniGateError::MalformedPayload(err)))?
    };

    let value = state.invocation_service.invoke(payload).await?;

    Ok(match state.response_mode {
        ResponseMode::Json => InvokeResponse::Json(Json(value)),
        ResponseMode::Raw => InvokeResponse::Raw(render_raw(value)),
    })
}

/// Raw-mode rendering: strings pass through verbatim, any other value keeps
/// its JSON text.
fn render_raw(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}
