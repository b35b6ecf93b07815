//! Invocation service — the single use-case of the gateway.

use minigate_domain::error::MiniGateError;
use minigate_domain::id::InvocationId;
use minigate_domain::payload::Payload;

use crate::ports::Handler;

/// Application service that forwards a decoded payload to the handler.
///
/// Invocation is synchronous from the caller's point of view: the returned
/// future resolves only once the handler produced a result or failed.
pub struct InvocationService<H> {
    handler: H,
}

impl<H: Handler> InvocationService<H> {
    /// Create a new service around the given handler.
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Name of the wired handler.
    #[must_use]
    pub fn handler_name(&self) -> &'static str {
        self.handler.name()
    }

    /// Invoke the handler with `payload` as its sole argument.
    ///
    /// Each invocation gets an [`InvocationId`] that tags every log record
    /// it produces.
    ///
    /// # Errors
    ///
    /// Returns [`MiniGateError::Handler`] when the handler reports a failure.
    pub async fn invoke(&self, payload: Payload) -> Result<serde_json::Value, MiniGateError> {
        let invocation = InvocationId::new();
        tracing::info!(%invocation, handler = self.handler.name(), "received request");
        tracing::debug!(%invocation, payload = %payload, "decoded payload");

        let result = self.handler.call(payload).await?;

        tracing::debug!(%invocation, "handler completed");
        Ok(result)
    }
}
