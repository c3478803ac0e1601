//! Keyed fixed-window rate limiting.
//!
//! Each key (an email, a client address, a form name) owns an independent
//! window of `window_ms` milliseconds in which at most `max_requests` calls
//! are accepted. Windows start on the first accepted call and restart on
//! the first call after they expire.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use hearth_rate::{FixedWindowLimiter, RateLimitConfig};
//!
//! let limiter = FixedWindowLimiter::new(RateLimitConfig::new(2, Duration::from_secs(60)));
//!
//! assert!(limiter.can_proceed("ana@example.com"));
//! assert!(limiter.can_proceed("ana@example.com"));
//! assert!(!limiter.can_proceed("ana@example.com"));
//! assert!(limiter.can_proceed("bruno@example.com"));
//! ```
//!
//! The limiter is an ordinary value: construct one per guarded concern and
//! pass it where it is needed. It is `Sync`, so an `Arc<FixedWindowLimiter>`
//! may be shared by concurrent tasks without changing accept/reject counts.

pub use self::clock::{Clock, ManualClock, SystemClock};
pub use self::config::RateLimitConfig;
pub use self::limiter::FixedWindowLimiter;

mod clock;
mod config;
mod limiter;
