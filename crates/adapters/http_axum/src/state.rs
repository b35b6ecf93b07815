//! Shared application state for axum handlers.

use std::sync::Arc;

use minigate_app::ports::Handler;
use minigate_app::services::invocation_service::InvocationService;
use minigate_domain::response::ResponseMode;

/// Application state shared across all axum handlers.
///
/// Generic over the handler type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the handler itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<H> {
    /// The invocation use-case around the wired handler.
    pub invocation_service: Arc<InvocationService<H>>,
    /// Active response-shaping mode.
    pub response_mode: ResponseMode,
}

impl<H> Clone for AppState<H> {
    fn clone(&self) -> Self {
        Self {
            invocation_service: Arc::clone(&self.invocation_service),
            response_mode: self.response_mode,
        }
    }
}

impl<H> AppState<H>
where
    H: Handler + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(invocation_service: InvocationService<H>, response_mode: ResponseMode) -> Self {
        Self {
            invocation_service: Arc::new(invocation_service),
            response_mode,
        }
    }
}
