//! Session Store

use crate::client_error::ClientError;
use crate::tools::refresh::needs_refresh;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, PoisonError, RwLock};
use std::time::Duration;

#[derive(Debug, Default)]
struct SessionState {
    access_token: Option<String>,
    access_token_expiration: Option<DateTime<Utc>>,
    api_calls: u64,
    last_execution_time: Option<Duration>,
}

/// In-memory session state of a client: access token, its local expiration,
/// request counters and timings.
///
/// Locks are never held across an `.await`, so one store can back a client
/// shared between tasks.
#[derive(Debug)]
pub struct SessionStore {
    state: RwLock<SessionState>,
    start_time: DateTime<Utc>,
    auth_error: Mutex<Option<ClientError>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates an empty store; the start time is now.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            start_time: Utc::now(),
            auth_error: Mutex::new(None),
        }
    }

    /// Retrieves the stored access token (if any).
    pub fn token(&self) -> Option<String> {
        self.read().access_token.clone()
    }

    /// Local expiration of the stored token (if any).
    pub fn expiration(&self) -> Option<DateTime<Utc>> {
        self.read().access_token_expiration
    }

    /// Saves a newly granted token and its local expiration.
    pub fn save_token(&self, token: &str, expiration: DateTime<Utc>) {
        let mut state = self.write();
        state.access_token = Some(token.to_string());
        state.access_token_expiration = Some(expiration);
    }

    /// Whether a previously granted token has expired at `now`.
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        let state = self.read();
        needs_refresh(
            state.access_token.is_some(),
            state.access_token_expiration,
            now,
        )
    }

    /// Counts one completed HTTP round trip and remembers its duration.
    pub fn record_request(&self, elapsed: Duration) {
        let mut state = self.write();
        state.api_calls += 1;
        state.last_execution_time = Some(elapsed);
    }

    pub fn api_calls(&self) -> u64 {
        self.read().api_calls
    }

    pub fn last_execution_time(&self) -> Option<Duration> {
        self.read().last_execution_time
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Keeps the most recent authentication failure for later inspection.
    pub fn set_auth_error(&self, error: ClientError) {
        *self
            .auth_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
    }

    /// Takes the most recent authentication failure, leaving none behind.
    pub fn take_auth_error(&self) -> Option<ClientError> {
        self.auth_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Drops any stored authentication failure.
    pub fn clear_auth_error(&self) {
        self.take_auth_error();
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_token() {
        let store = SessionStore::new();
        assert!(store.token().is_none());
        assert!(store.expiration().is_none());

        let expiration = Utc::now() + chrono::Duration::seconds(3300);
        store.save_token("token123", expiration);

        assert_eq!(store.token().as_deref(), Some("token123"));
        assert_eq!(store.expiration(), Some(expiration));
    }

    #[test]
    fn test_needs_refresh() {
        let store = SessionStore::new();
        let now = Utc::now();
        assert!(!store.needs_refresh(now));

        store.save_token("t", now - chrono::Duration::seconds(1));
        assert!(store.needs_refresh(now));

        store.save_token("t", now + chrono::Duration::seconds(60));
        assert!(!store.needs_refresh(now));
    }

    #[test]
    fn test_record_request() {
        let store = SessionStore::new();
        assert_eq!(store.api_calls(), 0);
        assert!(store.last_execution_time().is_none());

        store.record_request(Duration::from_millis(12));
        store.record_request(Duration::from_millis(30));

        assert_eq!(store.api_calls(), 2);
        assert_eq!(store.last_execution_time(), Some(Duration::from_millis(30)));
        assert!(store.start_time() <= Utc::now());
    }

    #[test]
    fn test_auth_error() {
        let store = SessionStore::new();
        assert!(store.take_auth_error().is_none());

        store.set_auth_error(ClientError::AccessTokenNotGranted);
        assert!(matches!(
            store.take_auth_error(),
            Some(ClientError::AccessTokenNotGranted)
        ));
        assert!(store.take_auth_error().is_none());
    }
}
