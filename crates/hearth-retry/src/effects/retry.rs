use std::future::Future;

use tracing::debug;

use crate::core::{Retryable, is_retryable, retry_delay};
use crate::data::{RetryOptions, RetryPolicy};

/// Run `op` until it succeeds, fails with a non-retryable error, or the
/// policy runs out of retries.
///
/// `op` is invoked at most `1 + max_retries` times. Before each retry the
/// observer (if any) is told the 1-based retry number and the failure, then
/// the loop sleeps for [`retry_delay`]. The final error is returned exactly
/// as `op` produced it.
pub async fn with_retry<T, E, F, Fut>(options: &RetryOptions<E>, mut op: F) -> Result<T, E>
where
    E: Retryable,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let policy = &options.policy;
    let mut retry_count = 0u32;

    loop {
        let err = match op().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if retry_count >= policy.max_retries || !is_retryable(policy, &err) {
            return Err(err);
        }

        let delay = retry_delay(retry_count, policy);
        retry_count += 1;
        options.notify(retry_count, &err);
        debug!(
            retry = retry_count,
            max_retries = policy.max_retries,
            status = ?err.status(),
            delay_ms = delay.as_millis() as u64,
            "retrying after failure"
        );

        tokio::time::sleep(delay).await;
    }
}

/// [`with_retry`] without an observer.
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, op: F) -> Result<T, E>
where
    E: Retryable,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    with_retry(&RetryOptions::new(policy.clone()), op).await
}
