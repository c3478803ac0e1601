use crate::data::RetryPolicy;

/// Failure metadata the retry loop needs.
pub trait Retryable {
    /// HTTP status carried by the failure, `None` when no response arrived.
    fn status(&self) -> Option<u16>;

    /// Local failures that another attempt cannot fix.
    fn is_fatal(&self) -> bool { false }
}

impl Retryable for std::io::Error {
    fn status(&self) -> Option<u16> { None }
}

impl<E: Retryable + ?Sized> Retryable for Box<E> {
    fn status(&self) -> Option<u16> { (**self).status() }

    fn is_fatal(&self) -> bool { (**self).is_fatal() }
}

/// Returns `true` if `err` deserves another attempt under `policy`.
///
/// A failure without a status is a network-level failure and is always
/// retryable; one with a status only when the policy lists it.
///
/// # Examples
///
/// ```
/// use hearth_retry::{RetryPolicy, Retryable, is_retryable};
///
/// struct Status(u16);
/// impl Retryable for Status {
///     fn status(&self) -> Option<u16> { Some(self.0) }
/// }
///
/// let policy = RetryPolicy::default();
/// assert!(is_retryable(&policy, &Status(503)));
/// assert!(!is_retryable(&policy, &Status(404)));
/// ```
pub fn is_retryable<E: Retryable + ?Sized>(policy: &RetryPolicy, err: &E) -> bool {
    if err.is_fatal() {
        return false;
    }
    match err.status() {
        None => true,
        Some(status) => policy.retryable_statuses.contains(&status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Failure {
        Network,
        Status(u16),
        Decode,
    }

    impl Retryable for Failure {
        fn status(&self) -> Option<u16> {
            match self {
                Failure::Status(code) => Some(*code),
                Failure::Network | Failure::Decode => None,
            }
        }

        fn is_fatal(&self) -> bool { matches!(self, Failure::Decode) }
    }

    #[test]
    fn network_failures_are_retryable() {
        assert!(is_retryable(&RetryPolicy::default(), &Failure::Network));
        assert!(is_retryable(&RetryPolicy::default().retryable_statuses([]), &Failure::Network));
    }

    #[test]
    fn default_statuses_are_retryable() {
        let policy = RetryPolicy::default();
        for status in [408, 429, 500, 502, 503, 504] {
            assert!(is_retryable(&policy, &Failure::Status(status)), "status {status}");
        }
    }

    #[test]
    fn client_errors_are_not_retryable() {
        let policy = RetryPolicy::default();
        for status in [400, 401, 403, 404, 409, 422, 501] {
            assert!(!is_retryable(&policy, &Failure::Status(status)), "status {status}");
        }
    }

    #[test]
    fn custom_statuses_replace_defaults() {
        let policy = RetryPolicy::default().retryable_statuses([409]);
        assert!(is_retryable(&policy, &Failure::Status(409)));
        assert!(!is_retryable(&policy, &Failure::Status(503)));
    }

    #[test]
    fn fatal_failures_are_never_retried() {
        assert!(!is_retryable(&RetryPolicy::default(), &Failure::Decode));
    }

    #[test]
    fn io_errors_count_as_network_failures() {
        let err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        assert!(is_retryable(&RetryPolicy::default(), &err));
    }
}
