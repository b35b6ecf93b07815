//! End-to-end smoke tests for the full minigated stack.
//!
//! Each test wires a real handler, service, and axum router and exercises
//! the HTTP layer via `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use minigate_adapter_builtin::{EchoHandler, FixedHandler};
use minigate_adapter_http_axum::router;
use minigate_adapter_http_axum::state::AppState;
use minigate_app::ports::{FnHandler, Handler};
use minigate_app::services::invocation_service::InvocationService;
use minigate_domain::error::HandlerError;
use minigate_domain::payload::Payload;
use minigate_domain::response::ResponseMode;
use tower::ServiceExt;

/// Build a fully-wired router around the given handler.
fn app<H>(handler: H, mode: ResponseMode) -> axum::Router
where
    H: Handler + Send + Sync + 'static,
{
    router::build(AppState::new(InvocationService::new(handler), mode))
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Payload decoding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_invoke_handler_with_exactly_the_decoded_body() {
    let handler = FnHandler::new("assert-input", |payload: Payload| async move {
        assert_eq!(*payload.as_value(), serde_json::json!({"x": 1}));
        Ok(serde_json::json!({"seen": true}))
    });

    let response = app(handler, ResponseMode::Json)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::from(r#"{"x": 1}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, serde_json::json!({"seen": true}));
}

#[tokio::test]
async fn should_invoke_handler_with_empty_mapping_when_body_is_empty() {
    let handler = FnHandler::new("assert-empty", |payload: Payload| async move {
        assert_eq!(*payload.as_value(), serde_json::json!({}));
        Ok(serde_json::json!("seen"))
    });

    let response = app(handler, ResponseMode::Json)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_reject_malformed_body_without_invoking_handler() {
    let called = Arc::new(AtomicBool::new(false));
    let called_by_handler = Arc::clone(&called);
    let handler = FnHandler::new("must-not-run", move |_payload: Payload| {
        let called = Arc::clone(&called_by_handler);
        async move {
            called.store(true, Ordering::SeqCst);
            Ok(serde_json::Value::Null)
        }
    });

    let response = app(handler, ResponseMode::Json)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!called.load(Ordering::SeqCst));

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(body["error"].as_str().unwrap().contains("invalid JSON"));
}

// ---------------------------------------------------------------------------
// Handler failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_server_error_when_handler_fails() {
    let handler = FnHandler::new("failing", |_payload: Payload| async move {
        Err(HandlerError::new("failing", "synthetic failure"))
    });

    let response = app(handler, ResponseMode::Json)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Internal details stay in the logs; the caller only sees a generic body.
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["error"], "internal server error");
}

// ---------------------------------------------------------------------------
// Response shaping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serialize_handler_result_as_json_with_content_type() {
    let handler =
        FnHandler::new("fixed-y", |_payload: Payload| async move { Ok(serde_json::json!({"y": 2})) });

    let response = app(handler, ResponseMode::Json)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::from(r#"{"x": 1}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = body_bytes(response).await;
    assert_eq!(&body[..], br#"{"y":2}"#);
}

#[tokio::test]
async fn should_serialize_string_result_as_json_string() {
    let response = app(FixedHandler::default(), ResponseMode::Json)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    assert_eq!(&body[..], b"\"ok\"");
}

#[tokio::test]
async fn should_write_string_result_verbatim_in_raw_mode() {
    let response = app(FixedHandler::default(), ResponseMode::Raw)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn should_render_object_result_as_json_text_in_raw_mode() {
    let handler = FixedHandler::new(serde_json::json!({"y": 2}));

    let response = app(handler, ResponseMode::Raw)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    assert_eq!(&body[..], br#"{"y":2}"#);
}

// ---------------------------------------------------------------------------
// Route surface
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_accept_any_method_on_root() {
    for method in ["GET", "POST", "PUT", "DELETE", "PATCH"] {
        let response = app(EchoHandler, ResponseMode::Json)
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/")
                    .body(Body::from(r#"{"via": "any"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "method {method}");
        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body, serde_json::json!({"via": "any"}));
    }
}

#[tokio::test]
async fn should_not_recognize_other_routes() {
    let response = app(EchoHandler, ResponseMode::Json)
        .oneshot(
            Request::builder()
                .uri("/functions/echo")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_echo_array_payloads() {
    let response = app(EchoHandler, ResponseMode::Json)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::from("[1, 2, 3]"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, serde_json::json!([1, 2, 3]));
}
