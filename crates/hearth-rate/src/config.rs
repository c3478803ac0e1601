use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Window size and admission count for a [`FixedWindowLimiter`](crate::FixedWindowLimiter).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hearth_rate::RateLimitConfig;
///
/// let config = RateLimitConfig::default()
///     .max_requests(3)
///     .window(Duration::from_secs(60));
///
/// assert_eq!(config.window_ms, 60_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Calls accepted per key within one window.
    ///
    /// Default: 10
    pub max_requests: u32,

    /// Window length in milliseconds.
    ///
    /// Default: 60000
    pub window_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window_ms:    60_000,
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self::default().max_requests(max_requests).window(window)
    }

    #[must_use]
    pub fn max_requests(mut self, max_requests: u32) -> Self {
        self.max_requests = max_requests;
        self
    }

    /// Set the window length, truncated to whole milliseconds.
    #[must_use]
    pub fn window(mut self, window: Duration) -> Self {
        self.window_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn window_duration(&self) -> Duration { Duration::from_millis(self.window_ms) }
}
