use std::time::Duration;

use crate::data::RetryPolicy;

/// Calculate the delay before a retry attempt using capped exponential backoff.
///
/// The delay formula is: `min(initial_delay * multiplier^retry_count, max_delay)`
///
/// # Arguments
///
/// * `retry_count` - The current retry number (0-indexed: 0 = first retry)
/// * `policy` - Supplies the initial delay, multiplier and cap
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hearth_retry::{RetryPolicy, retry_delay};
///
/// let policy = RetryPolicy::default();
///
/// // First retry: initial * 2^0
/// assert_eq!(retry_delay(0, &policy), Duration::from_millis(1000));
///
/// // Second retry: initial * 2^1
/// assert_eq!(retry_delay(1, &policy), Duration::from_millis(2000));
///
/// // Fifth retry would be 16s, capped at max_delay
/// assert_eq!(retry_delay(4, &policy), Duration::from_millis(10_000));
/// ```
pub fn retry_delay(retry_count: u32, policy: &RetryPolicy) -> Duration {
    let cap = policy.max_delay_duration();
    let exponent = i32::try_from(retry_count).unwrap_or(i32::MAX);
    let scaled_ms = policy.initial_delay_ms as f64 * policy.backoff_multiplier.powi(exponent);

    // NaN, infinity and anything past the cap all collapse to the cap
    if !scaled_ms.is_finite() || scaled_ms >= policy.max_delay_ms as f64 {
        return cap;
    }

    // float to int casts saturate, negative products land on zero
    Duration::from_micros((scaled_ms * 1_000.0).round() as u64).min(cap)
}
