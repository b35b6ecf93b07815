//! # minigated — minigate daemon
//!
//! Composition root that wires a handler into the gateway and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise the `tracing` subscriber
//! - Construct the selected built-in handler
//! - Construct the invocation service, injecting the handler via its port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use minigate_adapter_builtin::{EchoHandler, FixedHandler};
use minigate_adapter_http_axum::state::AppState;
use minigate_app::ports::Handler;
use minigate_app::services::invocation_service::InvocationService;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    match config.handler.builtin.as_str() {
        "echo" => serve(&config, EchoHandler).await,
        "fixed" => {
            let handler = match &config.handler.value {
                Some(text) => FixedHandler::new(
                    serde_json::from_str(text)
                        .context("handler value in configuration is not valid JSON")?,
                ),
                None => FixedHandler::default(),
            };
            serve(&config, handler).await
        }
        other => anyhow::bail!("unknown builtin handler '{other}', expected 'echo' or 'fixed'"),
    }
}

async fn serve<H>(config: &Config, handler: H) -> anyhow::Result<()>
where
    H: Handler + Send + Sync + 'static,
{
    let service = InvocationService::new(handler);
    tracing::info!(
        handler = service.handler_name(),
        mode = %config.gateway.response_mode,
        "starting gateway"
    );

    let state = AppState::new(service, config.gateway.response_mode);
    let app = minigate_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(address = %bind_addr, "minigated listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Resolves when SIGINT (Ctrl+C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
