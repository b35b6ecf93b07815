//! Common error types used across the workspace.
//!
//! Each failure kind is a typed source struct; [`MiniGateError`] aggregates
//! them with `#[from]` conversions so every layer can use `?` without
//! stringly-typed variants.

/// Top-level error for a gateway request.
///
/// There are exactly two ways a request can fail: the body is present but
/// not parseable as JSON, or the handler itself reports a failure.
#[derive(Debug, thiserror::Error)]
pub enum MiniGateError {
    /// Request body was present but could not be decoded as JSON.
    #[error("malformed payload")]
    MalformedPayload(#[from] MalformedPayloadError),

    /// The handler was invoked and reported a failure.
    #[error("handler failed")]
    Handler(#[from] HandlerError),
}

/// A non-empty request body that is not valid JSON.
#[derive(Debug, thiserror::Error)]
#[error("invalid JSON in request body: {reason}")]
pub struct MalformedPayloadError {
    /// Parser diagnostic, suitable for returning to the caller.
    pub reason: String,
}

/// A failure reported by a handler during invocation.
#[derive(Debug, thiserror::Error)]
#[error("handler '{handler}' failed: {message}")]
pub struct HandlerError {
    /// Name of the handler that failed.
    pub handler: String,
    /// Failure description. Logged server-side, never sent to the caller.
    pub message: String,
}

impl HandlerError {
    /// Build a handler error from a handler name and any displayable cause.
    pub fn new(handler: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self {
            handler: handler.into(),
            message: message.to_string(),
        }
    }
}
