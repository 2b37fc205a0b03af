//! Rate limit retry policy

use std::time::Duration;

/// HTTP status returned by the API when the request rate is exceeded.
pub const TOO_MANY_REQUESTS: u16 = 429;

/// How the client reacts to rate-limited (429) responses.
///
/// The default sleeps 60 seconds and retries the identical request with no
/// attempt limit and no backoff growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Pause before resending a rate-limited request.
    pub delay: Duration,

    /// Maximum number of retries; `None` retries forever.
    pub max_retries: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(60),
            max_retries: None,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given delay and no attempt limit.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Default::default()
        }
    }

    /// Caps the number of retries.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Decides whether a response should be retried.
    ///
    /// `retries` is the number of retries already performed for this request.
    pub fn should_retry(&self, status: u16, retries: u32) -> bool {
        if status != TOO_MANY_REQUESTS {
            return false;
        }
        match self.max_retries {
            Some(max) => retries < max,
            None => true,
        }
    }
}
