//! Axum router assembly.

use axum::Router;
use axum::routing::any;
use tower_http::trace::TraceLayer;

use minigate_app::ports::Handler;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// The gateway recognizes a single route: `/`, reachable with any method
/// (the invocation contract does not restrict methods). Requests to any
/// other path fall through to the framework 404. Includes a [`TraceLayer`]
/// that logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<H>(state: AppState<H>) -> Router
where
    H: Handler + Send + Sync + 'static,
{
    Router::new()
        .route("/", any(crate::invoke::invoke::<H>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
