//! # minigate-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`Handler` port** that the externally supplied business
//!   logic implements (one function of one payload argument)
//! - Provide [`FnHandler`](ports::handler::FnHandler) so a plain async
//!   function can be used as a handler without a dedicated type
//! - Define the **`InvocationService`** use-case: log the request, call the
//!   handler, surface its result or failure
//!
//! ## Dependency rule
//! Depends on `minigate-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
