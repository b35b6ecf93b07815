//! How a handler result is shaped into a response body.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Response-shaping mode for handler results.
///
/// The gateway supports two modes; which one is active is a deployment
/// decision made in configuration, not per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Serialize the result as JSON with `Content-Type: application/json`.
    #[default]
    Json,
    /// Write the result through without JSON re-encoding: a string result
    /// becomes the body verbatim, any other value is rendered as its JSON
    /// text. Served as plain text.
    Raw,
}

impl ResponseMode {
    /// Configuration token for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown response-mode token.
#[derive(Debug, thiserror::Error)]
#[error("unknown response mode '{0}', expected 'json' or 'raw'")]
pub struct ParseResponseModeError(String);

impl FromStr for ResponseMode {
    type Err = ParseResponseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "raw" => Ok(Self::Raw),
            other => Err(ParseResponseModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_json() {
        assert_eq!(ResponseMode::default(), ResponseMode::Json);
    }

    #[test]
    fn should_parse_known_tokens() {
        assert_eq!("json".parse::<ResponseMode>().unwrap(), ResponseMode::Json);
        assert_eq!("raw".parse::<ResponseMode>().unwrap(), ResponseMode::Raw);
    }

    #[test]
    fn should_reject_unknown_token() {
        assert!("xml".parse::<ResponseMode>().is_err());
    }

    #[test]
    fn should_roundtrip_through_serde() {
        let mode: ResponseMode = serde_json::from_str("\"raw\"").unwrap();
        assert_eq!(mode, ResponseMode::Raw);
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"raw\"");
    }

    #[test]
    fn should_display_configuration_token() {
        assert_eq!(ResponseMode::Json.to_string(), "json");
        assert_eq!(ResponseMode::Raw.to_string(), "raw");
    }
}
