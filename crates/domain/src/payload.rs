//! The decoded JSON request body handed to a handler.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MalformedPayloadError;

/// Decoded request payload.
///
/// A thin wrapper over [`serde_json::Value`] so handlers receive one generic
/// JSON value (object, array, scalar) regardless of what the caller sent.
/// An absent request body decodes to the empty mapping, see [`Payload::empty`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(serde_json::Value);

impl Payload {
    /// The empty mapping (`{}`) — the payload used when no body was sent.
    #[must_use]
    pub fn empty() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }

    /// Decode a payload from raw body bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPayloadError`] when the bytes are not valid JSON.
    /// Callers are expected to handle the zero-length case themselves (an
    /// empty slice is *not* valid JSON).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MalformedPayloadError> {
        serde_json::from_slice(bytes)
            .map(Self)
            .map_err(|err| MalformedPayloadError {
                reason: err.to_string(),
            })
    }

    /// Wrap an already-decoded JSON value.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Consume the payload, yielding the inner JSON value.
    #[must_use]
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// Borrow the inner JSON value.
    #[must_use]
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
