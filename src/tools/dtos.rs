//! Data Transfer Objects (DTOs)

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grant returned by the token endpoint of the JWT-bearer exchange.
///
/// Only `access_token` is read; `token_type`, `expires_in` and any other
/// field may have whatever shape the server chooses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

impl TokenResponse {
    /// Reads the grant from a decoded token endpoint body. An empty or
    /// non-string `access_token` counts as absent.
    pub fn from_value(body: &serde_json::Value) -> Self {
        Self {
            access_token: body
                .get("access_token")
                .and_then(serde_json::Value::as_str)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        }
    }
}

/// Full response of an API call: headers, status code and decoded body.
#[derive(Debug, Clone)]
pub struct IfbResponse {
    pub headers: HeaderMap,
    pub status_code: u16,
    pub response: serde_json::Value,
}

impl IfbResponse {
    /// Creates a new IfbResponse.
    pub fn new(headers: HeaderMap, status_code: u16, response: serde_json::Value) -> Self {
        Self {
            headers,
            status_code,
            response,
        }
    }

    /// Returns whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Iterates over the body elements when the body is a JSON array.
    /// Yields nothing for any other body.
    pub fn iter(&self) -> std::slice::Iter<'_, serde_json::Value> {
        match &self.response {
            serde_json::Value::Array(items) => items.iter(),
            _ => <&[serde_json::Value]>::default().iter(),
        }
    }
}

impl fmt::Display for IfbResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status_code)
    }
}

impl<'a> IntoIterator for &'a IfbResponse {
    type Item = &'a serde_json::Value;
    type IntoIter = std::slice::Iter<'a, serde_json::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Result of an API call, shaped by the client's response mode.
#[derive(Debug, Clone)]
pub enum Response {
    /// Simplified mode: the decoded body only.
    Body(serde_json::Value),
    /// Default mode: headers, status code and decoded body.
    Full(IfbResponse),
}

impl Response {
    /// Returns the decoded body.
    pub fn body(&self) -> &serde_json::Value {
        match self {
            Response::Body(body) => body,
            Response::Full(full) => &full.response,
        }
    }

    /// Consumes the response and returns the decoded body.
    pub fn into_body(self) -> serde_json::Value {
        match self {
            Response::Body(body) => body,
            Response::Full(full) => full.response,
        }
    }

    /// Returns the status code. Not available in simplified mode.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Response::Body(_) => None,
            Response::Full(full) => Some(full.status_code),
        }
    }

    /// Returns the response headers. Not available in simplified mode.
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            Response::Body(_) => None,
            Response::Full(full) => Some(&full.headers),
        }
    }

    /// Returns the full wrapper, if the client runs in default mode.
    pub fn as_full(&self) -> Option<&IfbResponse> {
        match self {
            Response::Body(_) => None,
            Response::Full(full) => Some(full),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Body(body) => write!(f, "{}", body),
            Response::Full(full) => write!(f, "{}", full),
        }
    }
}

/// Decodes a response body: empty text becomes `null` and text that is not
/// JSON is kept as a JSON string.
pub fn decode_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}
