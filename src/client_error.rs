//! Client Error type

use thiserror::Error;

/// ClientError wraps and normalizes every failure the client can raise.
///
/// HTTP error statuses returned by resource endpoints are *not* errors;
/// they come back inside the response for the caller to inspect.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required construction parameter was empty or zero.
    #[error("Invalid parameter values")]
    InvalidParameters,

    /// The API version is not one of 6, 8 or 8.1.
    #[error("Invalid version: {0}")]
    InvalidVersion(f64),

    /// The region is not one of us, uk, au, hipaa or qa.
    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    /// An endpoint override could not be parsed.
    #[error("URL parse error: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The token endpoint was unreachable or answered with a non-2xx status.
    #[error("Authentication failed (status {status:?}): {message}")]
    Authentication { status: Option<u16>, message: String },

    /// The token endpoint answered without an `access_token` field.
    #[error("Access token not granted")]
    AccessTokenNotGranted,

    /// The JWT-bearer assertion could not be signed.
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// An operation name did not decompose into a known verb and resource.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// The number of path parameters does not match the resource template.
    #[error("{resource} expects {expected} path parameter(s), got {given}")]
    PathParameters {
        resource: &'static str,
        expected: usize,
        given: usize,
    },

    /// The HTTP round trip itself failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Creates an authentication error from a failed token exchange.
    pub fn authentication(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Authentication {
            status,
            message: message.into(),
        }
    }

    /// Returns whether the error was raised while validating construction parameters.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameters
                | Self::InvalidVersion(_)
                | Self::InvalidRegion(_)
                | Self::InvalidUrl(_)
        )
    }

    /// Returns whether the error was raised by the token exchange.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::AccessTokenNotGranted | Self::Jwt(_)
        )
    }

    /// HTTP status associated with the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } => *status,
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert!(ClientError::InvalidParameters.is_config_error());
        assert!(ClientError::InvalidRegion("eu".to_string()).is_config_error());
        assert!(!ClientError::AccessTokenNotGranted.is_config_error());
        assert!(ClientError::AccessTokenNotGranted.is_auth_error());
        assert!(ClientError::authentication(Some(401), "denied").is_auth_error());
        assert!(!ClientError::UnknownOperation("x".to_string()).is_auth_error());
    }

    #[test]
    fn test_status() {
        assert_eq!(ClientError::authentication(Some(401), "denied").status(), Some(401));
        assert_eq!(ClientError::InvalidParameters.status(), None);
    }

    #[test]
    fn test_display() {
        let err = ClientError::PathParameters {
            resource: "User",
            expected: 2,
            given: 1,
        };
        assert_eq!(err.to_string(), "User expects 2 path parameter(s), got 1");
    }
}
