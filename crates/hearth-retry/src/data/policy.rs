use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Status codes retried by default: timeouts, throttling and gateway failures.
pub const DEFAULT_RETRYABLE_STATUSES: [u16; 6] = [408, 429, 500, 502, 503, 504];

/// How often and how patiently a failed call is retried.
///
/// # Examples
///
/// ```
/// use hearth_retry::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default()
///     .max_retries(5)
///     .initial_delay(Duration::from_millis(200))
///     .retryable_status(409);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the initial attempt.
    ///
    /// Total attempts = 1 (initial) + max_retries
    ///
    /// Default: 3
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds.
    ///
    /// Default: 1000
    pub initial_delay_ms: u64,

    /// Upper bound for any single delay, in milliseconds.
    ///
    /// Default: 10000
    pub max_delay_ms: u64,

    /// Factor applied to the delay after each retry.
    ///
    /// Default: 2.0
    pub backoff_multiplier: f64,

    /// HTTP statuses worth another attempt.
    ///
    /// Default: 408, 429, 500, 502, 503, 504
    pub retryable_statuses: BTreeSet<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries:        3,
            initial_delay_ms:   1_000,
            max_delay_ms:       10_000,
            backoff_multiplier: 2.0,
            retryable_statuses: DEFAULT_RETRYABLE_STATUSES.into_iter().collect(),
        }
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    pub fn none() -> Self { Self::default().max_retries(0) }

    #[must_use]
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay_ms = duration_ms(delay);
        self
    }

    #[must_use]
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay_ms = duration_ms(delay);
        self
    }

    #[must_use]
    pub fn backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Add one status to the retryable set.
    #[must_use]
    pub fn retryable_status(mut self, status: u16) -> Self {
        self.retryable_statuses.insert(status);
        self
    }

    /// Replace the retryable set.
    #[must_use]
    pub fn retryable_statuses(mut self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.retryable_statuses = statuses.into_iter().collect();
        self
    }

    pub fn initial_delay_duration(&self) -> Duration { Duration::from_millis(self.initial_delay_ms) }

    pub fn max_delay_duration(&self) -> Duration { Duration::from_millis(self.max_delay_ms) }
}

fn duration_ms(delay: Duration) -> u64 { u64::try_from(delay.as_millis()).unwrap_or(u64::MAX) }
