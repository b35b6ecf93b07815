//! Handler port — the externally supplied business logic behind the gateway.
//!
//! A handler is a function of one argument: it receives the decoded request
//! payload and returns a JSON-serializable value. The gateway owns nothing
//! about what the handler does; it only decodes, invokes, and writes back.

use std::future::Future;

use minigate_domain::error::HandlerError;
use minigate_domain::payload::Payload;

/// The business-logic seam of the gateway.
///
/// Implementations live outside the core (adapter crates, user code).
/// The binary crate selects one implementation at startup and the gateway
/// invokes it once per request.
pub trait Handler: Send + Sync {
    /// Unique name identifying this handler (used in logs and error reports).
    fn name(&self) -> &'static str;

    /// Invoke the handler with the decoded payload as its sole argument.
    ///
    /// Returning an error maps to a server-error response; the gateway never
    /// retries.
    fn call(
        &self,
        payload: Payload,
    ) -> impl Future<Output = Result<serde_json::Value, HandlerError>> + Send;
}

/// Adapter that turns a plain async function into a [`Handler`].
///
/// Keeps the original contract, a function of one argument, usable without
/// declaring a dedicated type:
///
/// ```
/// use minigate_app::ports::{FnHandler, Handler};
/// use minigate_domain::error::HandlerError;
/// use minigate_domain::payload::Payload;
///
/// let handler = FnHandler::new("double", |payload: Payload| async move {
///     let n = payload.as_value()["n"].as_i64().unwrap_or(0);
///     Ok::<_, HandlerError>(serde_json::json!({ "n": n * 2 }))
/// });
/// assert_eq!(handler.name(), "double");
/// ```
pub struct FnHandler<F> {
    name: &'static str,
    func: F,
}

impl<F> FnHandler<F> {
    /// Wrap `func` as a handler named `name`.
    pub fn new(name: &'static str, func: F) -> Self {
        Self { name, func }
    }
}

impl<F, Fut> Handler for FnHandler<F>
where
    F: Fn(Payload) -> Fut + Send + Sync,
    Fut: Future<Output = Result<serde_json::Value, HandlerError>> + Send,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn call(
        &self,
        payload: Payload,
    ) -> impl Future<Output = Result<serde_json::Value, HandlerError>> + Send {
        (self.func)(payload)
    }
}
