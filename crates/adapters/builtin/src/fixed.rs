//! Fixed handler — returns a constant JSON value regardless of the payload.

use minigate_app::ports::Handler;
use minigate_domain::error::HandlerError;
use minigate_domain::payload::Payload;

/// Handler that ignores its payload and returns a value chosen at startup.
///
/// Typically used to smoke-test a deployment: point a caller at the gateway
/// and check that the configured value comes back.
#[derive(Debug, Clone)]
pub struct FixedHandler {
    value: serde_json::Value,
}

impl FixedHandler {
    /// Create a handler that always returns `value`.
    #[must_use]
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }
}

impl Default for FixedHandler {
    fn default() -> Self {
        Self::new(serde_json::Value::String("ok".to_string()))
    }
}

impl Handler for FixedHandler {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn call(&self, _payload: Payload) -> Result<serde_json::Value, HandlerError> {
        Ok(self.value.clone())
    }
}
