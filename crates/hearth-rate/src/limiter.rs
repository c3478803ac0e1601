use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::config::RateLimitConfig;

#[derive(Debug, Clone, Copy)]
struct Window {
    count:    u32,
    reset_at: Instant,
}

impl Window {
    fn is_expired(&self, now: Instant) -> bool { now >= self.reset_at }
}

/// Fixed-window counter keyed by caller-chosen strings.
///
/// Check and increment happen under a single lock, so the number of calls
/// accepted per window stays exact when the limiter is shared between
/// threads.
pub struct FixedWindowLimiter<C: Clock = SystemClock> {
    config:  RateLimitConfig,
    clock:   C,
    windows: Mutex<HashMap<String, Window>>,
}

impl FixedWindowLimiter<SystemClock> {
    pub fn new(config: RateLimitConfig) -> Self { Self::with_clock(config, SystemClock) }
}

impl<C: Clock> FixedWindowLimiter<C> {
    pub fn with_clock(config: RateLimitConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &RateLimitConfig { &self.config }

    /// Record an attempt for `key` and report whether it is admitted.
    ///
    /// A key without a live window is always admitted and opens a new
    /// window with a count of one. Rejected attempts are not counted.
    pub fn can_proceed(&self, key: &str) -> bool {
        let now = self.clock.now();
        let mut windows = self.windows();

        match windows.get_mut(key) {
            Some(window) if !window.is_expired(now) => {
                if window.count < self.config.max_requests {
                    window.count += 1;
                    true
                } else {
                    debug!(key, max_requests = self.config.max_requests, "rate limit reached");
                    false
                }
            }
            _ => {
                windows.insert(key.to_owned(), Window {
                    count:    1,
                    reset_at: now + self.config.window_duration(),
                });
                true
            }
        }
    }

    /// Time left before `key` gets a fresh window; zero when unknown or expired.
    pub fn time_until_reset(&self, key: &str) -> Duration {
        let now = self.clock.now();
        self.windows()
            .get(key)
            .map(|window| window.reset_at.saturating_duration_since(now))
            .unwrap_or_default()
    }

    pub fn reset(&self, key: &str) { self.windows().remove(key); }

    /// Drop every expired window and return how many were removed.
    pub fn cleanup(&self) -> usize {
        let now = self.clock.now();
        let mut windows = self.windows();
        let before = windows.len();
        windows.retain(|_, window| !window.is_expired(now));
        let removed = before - windows.len();
        trace!(removed, remaining = windows.len(), "rate limiter cleanup");
        removed
    }

    /// Number of keys currently tracked, expired or not.
    pub fn len(&self) -> usize { self.windows().len() }

    pub fn is_empty(&self) -> bool { self.windows().is_empty() }

    /// Run [`cleanup`](Self::cleanup) every `period` on the current tokio runtime.
    ///
    /// The task holds only a weak reference and ends once the limiter is
    /// dropped; abort the handle to stop it earlier.
    pub fn spawn_cleanup(self: &Arc<Self>, period: Duration) -> JoinHandle<()>
    where
        C: 'static,
    {
        let limiter = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match limiter.upgrade() {
                    Some(limiter) => {
                        limiter.cleanup();
                    }
                    None => break,
                }
            }
        })
    }

    fn windows(&self) -> MutexGuard<'_, HashMap<String, Window>> {
        self.windows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock> std::fmt::Debug for FixedWindowLimiter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedWindowLimiter")
            .field("config", &self.config)
            .field("keys", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn limiter(max_requests: u32, window: Duration) -> (FixedWindowLimiter<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let limiter = FixedWindowLimiter::with_clock(RateLimitConfig::new(max_requests, window), clock.clone());
        (limiter, clock)
    }

    #[test]
    fn admits_max_requests_then_rejects() {
        let (limiter, _clock) = limiter(3, Duration::from_secs(60));

        assert!(limiter.can_proceed("k"));
        assert!(limiter.can_proceed("k"));
        assert!(limiter.can_proceed("k"));
        assert!(!limiter.can_proceed("k"));
        assert!(!limiter.can_proceed("k"));
    }

    #[test]
    fn expired_window_starts_fresh() {
        let (limiter, clock) = limiter(2, Duration::from_secs(10));

        assert!(limiter.can_proceed("k"));
        assert!(limiter.can_proceed("k"));
        assert!(!limiter.can_proceed("k"));

        clock.advance(Duration::from_secs(10));

        assert!(limiter.can_proceed("k"));
        assert_eq!(limiter.time_until_reset("k"), Duration::from_secs(10));
        assert!(limiter.can_proceed("k"));
        assert!(!limiter.can_proceed("k"));
    }

    #[test]
    fn keys_are_independent() {
        let (limiter, _clock) = limiter(1, Duration::from_secs(60));

        assert!(limiter.can_proceed("a"));
        assert!(!limiter.can_proceed("a"));
        assert!(limiter.can_proceed("b"));
    }

    #[test]
    fn time_until_reset_counts_down_to_zero() {
        let (limiter, clock) = limiter(5, Duration::from_millis(1_000));

        assert_eq!(limiter.time_until_reset("k"), Duration::ZERO);
        limiter.can_proceed("k");

        let mut previous = limiter.time_until_reset("k");
        assert_eq!(previous, Duration::from_millis(1_000));
        for _ in 0..4 {
            clock.advance(Duration::from_millis(300));
            let remaining = limiter.time_until_reset("k");
            assert!(remaining <= previous);
            previous = remaining;
        }
        assert_eq!(previous, Duration::ZERO);
    }

    #[test]
    fn rejections_do_not_extend_the_window() {
        let (limiter, clock) = limiter(1, Duration::from_secs(10));

        limiter.can_proceed("k");
        clock.advance(Duration::from_secs(4));
        assert!(!limiter.can_proceed("k"));
        assert_eq!(limiter.time_until_reset("k"), Duration::from_secs(6));
    }

    #[test]
    fn reset_forgets_the_key() {
        let (limiter, _clock) = limiter(1, Duration::from_secs(60));

        assert!(limiter.can_proceed("k"));
        assert!(!limiter.can_proceed("k"));

        limiter.reset("k");

        assert_eq!(limiter.time_until_reset("k"), Duration::ZERO);
        assert!(limiter.can_proceed("k"));
    }

    #[test]
    fn cleanup_removes_only_expired_windows() {
        let (limiter, clock) = limiter(1, Duration::from_secs(10));

        limiter.can_proceed("old");
        clock.advance(Duration::from_secs(6));
        limiter.can_proceed("new");
        clock.advance(Duration::from_secs(5));

        assert_eq!(limiter.cleanup(), 1);
        assert_eq!(limiter.len(), 1);
        assert!(!limiter.can_proceed("new"));
    }

    #[test]
    fn zero_max_requests_still_admits_the_opening_call() {
        let (limiter, _clock) = limiter(0, Duration::from_secs(1));

        assert!(limiter.can_proceed("k"));
        assert!(!limiter.can_proceed("k"));
    }

    #[tokio::test(start_paused = true)]
    async fn background_cleanup_drains_expired_keys() {
        let clock = ManualClock::new();
        let limiter = Arc::new(FixedWindowLimiter::with_clock(
            RateLimitConfig::new(1, Duration::from_secs(1)),
            clock.clone(),
        ));
        limiter.can_proceed("a");
        limiter.can_proceed("b");

        let handle = limiter.spawn_cleanup(Duration::from_secs(30));
        clock.advance(Duration::from_secs(2));
        tokio::time::sleep(Duration::from_secs(45)).await;

        assert!(limiter.is_empty());
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn background_cleanup_stops_when_limiter_is_dropped() {
        let limiter = Arc::new(FixedWindowLimiter::new(RateLimitConfig::default()));
        let handle = limiter.spawn_cleanup(Duration::from_secs(1));

        drop(limiter);
        tokio::time::sleep(Duration::from_secs(3)).await;

        assert!(handle.is_finished());
    }
}
