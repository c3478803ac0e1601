//! The retry loop.

mod retry;

pub use retry::{retry, with_retry};
