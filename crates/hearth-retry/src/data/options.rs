use std::fmt;
use std::sync::Arc;

use super::policy::RetryPolicy;

/// Callback invoked before each retry with the 1-based retry number and the
/// failure that triggered it.
pub type OnRetry<E> = Arc<dyn Fn(u32, &E) + Send + Sync>;

/// A [`RetryPolicy`] plus the optional retry observer.
///
/// # Examples
///
/// ```
/// use hearth_retry::{RetryOptions, RetryPolicy};
/// use std::sync::Arc;
///
/// let options: RetryOptions<std::io::Error> = RetryOptions::new(RetryPolicy::default())
///     .on_retry(Arc::new(|attempt, err| eprintln!("retry {attempt}: {err}")));
/// ```
pub struct RetryOptions<E> {
    pub policy: RetryPolicy,

    /// Invoked before sleeping ahead of each retry.
    ///
    /// Default: None
    pub on_retry: Option<OnRetry<E>>,
}

impl<E> RetryOptions<E> {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            on_retry: None,
        }
    }

    #[must_use]
    pub fn on_retry(mut self, on_retry: OnRetry<E>) -> Self {
        self.on_retry = Some(on_retry);
        self
    }

    pub(crate) fn notify(&self, attempt: u32, err: &E) {
        if let Some(ref callback) = self.on_retry {
            callback(attempt, err);
        }
    }
}

impl<E> Default for RetryOptions<E> {
    fn default() -> Self { Self::new(RetryPolicy::default()) }
}

impl<E> Clone for RetryOptions<E> {
    fn clone(&self) -> Self {
        Self {
            policy:   self.policy.clone(),
            on_retry: self.on_retry.clone(),
        }
    }
}

impl<E> From<RetryPolicy> for RetryOptions<E> {
    fn from(policy: RetryPolicy) -> Self { Self::new(policy) }
}

impl<E> fmt::Debug for RetryOptions<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryOptions")
            .field("policy", &self.policy)
            .field("on_retry", &self.on_retry.as_ref().map(|_| "{ ... }"))
            .finish()
    }
}
