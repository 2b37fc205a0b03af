//! Token refresh management
//!
//! Access tokens are refreshed lazily: before each request the client checks
//! whether a previously granted token has outlived its local expiration.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Configuration for the token exchange and refresh behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRefreshConfig {
    /// Validity of the signed JWT assertion.
    pub assertion_ttl: Duration,

    /// How long a granted access token is trusted locally. Kept below the
    /// server-side lifetime of one hour so the token is renewed early.
    pub token_lifetime: Duration,

    /// Timeout of the token request.
    pub request_timeout: Duration,
}

impl Default for AutoRefreshConfig {
    fn default() -> Self {
        Self {
            assertion_ttl: Duration::from_secs(300),
            token_lifetime: Duration::from_secs(3300),
            request_timeout: Duration::from_secs(5),
        }
    }
}

impl AutoRefreshConfig {
    /// Assertion validity as a chrono duration.
    pub fn assertion_window(&self) -> chrono::Duration {
        to_chrono(self.assertion_ttl)
    }

    /// Expiration instant of a token granted at `now`.
    pub fn expiration_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_add_signed(to_chrono(self.token_lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

fn to_chrono(duration: Duration) -> chrono::Duration {
    chrono::Duration::from_std(duration).unwrap_or_else(|_| chrono::Duration::days(365 * 100))
}

/// Checks whether the stored token must be refreshed before the next request.
///
/// A token that was never granted is not refreshed.
pub fn needs_refresh(
    has_token: bool,
    expiration: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    match expiration {
        Some(expiration) => has_token && now > expiration,
        None => false,
    }
}
