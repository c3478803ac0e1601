//! Pure retry decisions.
//!
//! Nothing here sleeps or performs I/O; the loop in [`effects`](crate::effects)
//! combines these answers with the timer.

mod classify;
mod delay;

pub use classify::{Retryable, is_retryable};
pub use delay::retry_delay;
