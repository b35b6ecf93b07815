//! # minigate-adapter-builtin
//!
//! Built-in handlers so the gateway runs out of the box. Real deployments
//! link their own [`Handler`](minigate_app::ports::Handler) implementation;
//! these exist for wiring, smoke tests, and demonstration.
//!
//! ## Provided handlers
//!
//! | Handler | Name | Behaviour |
//! |---------|------|-----------|
//! | [`EchoHandler`] | `echo` | Returns the request payload unchanged |
//! | [`FixedHandler`] | `fixed` | Returns a fixed JSON value set at construction |
//!
//! ## Dependency rule
//!
//! Depends on `minigate-app` (the handler port) and `minigate-domain` only.

mod echo;
mod fixed;

pub use echo::EchoHandler;
pub use fixed::FixedHandler;
