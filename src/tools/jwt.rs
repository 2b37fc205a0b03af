//! JWT-bearer assertion utilities

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// OAuth2 grant type of the assertion exchange.
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Claims of the assertion sent to the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionClaims {
    /// Issuer: the client key.
    pub iss: String,
    /// Audience: the token endpoint URL.
    pub aud: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

impl AssertionClaims {
    /// Creates claims issued at `now` and valid for `ttl`.
    pub fn new(client_key: &str, token_url: &str, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            iss: client_key.to_string(),
            aud: token_url.to_string(),
            iat: now.timestamp(),
            exp: now.checked_add_signed(ttl).unwrap_or(now).timestamp(),
        }
    }
}

/// Signs the claims with the client secret using HS256.
pub fn encode_assertion(
    claims: &AssertionClaims,
    client_secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(client_secret.as_bytes()),
    )
}
