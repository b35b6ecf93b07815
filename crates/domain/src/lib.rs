//! # minigate-domain
//!
//! Pure domain model for the minigate function-invocation gateway.
//!
//! ## Responsibilities
//! - Define the **Payload** (decoded JSON request body handed to a handler)
//! - Define the **ResponseMode** (how a handler result is written back)
//! - Foundational types: invocation identifiers, error conventions
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod payload;
pub mod response;
