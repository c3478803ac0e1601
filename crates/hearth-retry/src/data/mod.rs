//! Immutable retry configuration.

mod options;
mod policy;

pub use options::{OnRetry, RetryOptions};
pub use policy::{DEFAULT_RETRYABLE_STATUSES, RetryPolicy};
