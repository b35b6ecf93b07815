//! Echo handler — returns the request payload unchanged.

use minigate_app::ports::Handler;
use minigate_domain::error::HandlerError;
use minigate_domain::payload::Payload;

/// The default handler: whatever JSON the caller sends comes straight back.
///
/// Useful for verifying the full request/response path of a deployment
/// without any business logic in the way.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoHandler;

impl Handler for EchoHandler {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn call(&self, payload: Payload) -> Result<serde_json::Value, HandlerError> {
        Ok(payload.into_value())
    }
}
