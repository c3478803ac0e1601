//! Retry with capped exponential backoff.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Policy and options
//! - [`core`] - Pure decisions: retryability and delay
//! - [`effects`] - The retry loop, which sleeps on the tokio timer
//!
//! # Key Features
//!
//! - **Verbatim errors**: the last failure is returned unchanged, so callers
//!   can still match on their own error type
//! - **Status-aware**: failures without a status (network level) are always
//!   retried; failures with one only when it is listed in the policy
//! - **Mechanism-Only**: no timeout and no cancellation; the operation owns both
//!
//! # Example
//!
//! ```
//! use hearth_retry::{RetryPolicy, Retryable, retry};
//!
//! #[derive(Debug)]
//! struct Offline;
//!
//! impl Retryable for Offline {
//!     fn status(&self) -> Option<u16> { None }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let policy = RetryPolicy::default().initial_delay(std::time::Duration::from_millis(1));
//! let mut calls = 0;
//! let value = retry(&policy, || {
//!     calls += 1;
//!     let outcome = if calls < 3 { Err(Offline) } else { Ok(calls) };
//!     async move { outcome }
//! })
//! .await
//! .unwrap();
//! assert_eq!(value, 3);
//! # });
//! ```

pub mod core;
pub mod data;
pub mod effects;

pub use self::core::{Retryable, is_retryable, retry_delay};
pub use self::data::{DEFAULT_RETRYABLE_STATUSES, OnRetry, RetryOptions, RetryPolicy};
pub use self::effects::{retry, with_retry};
