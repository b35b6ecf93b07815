//! # minigate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **single invocation route**: `/` with any method
//! - Decode the optional JSON request body into a domain
//!   [`Payload`](minigate_domain::payload::Payload) (absent body ⇒ empty
//!   mapping, malformed body ⇒ client error before the handler runs)
//! - Map the invocation result into a response body according to the active
//!   [`ResponseMode`](minigate_domain::response::ResponseMode)
//! - Map application errors into HTTP status codes
//!
//! ## Dependency rule
//! Depends on `minigate-app` (for the handler port and service) and
//! `minigate-domain` (for payload/error types). Never leaks axum types into
//! the domain.

pub mod error;
#[allow(clippy::missing_errors_doc)]
pub mod invoke;
pub mod router;
pub mod state;
