use std::fmt::Display;
use std::future::Future;

use serde::{Deserialize, Serialize};

/// One page of results as returned by a paged endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data:     Vec<T>,
    pub has_more: bool,
}

impl<T> Page<T> {
    /// The final page.
    pub fn last(data: Vec<T>) -> Self {
        Self {
            data,
            has_more: false,
        }
    }
}

/// Asynchronous supplier of pages.
///
/// `page` is zero-based; `limit` is the requested page size.
pub trait PageSource<T>: Send + Sync {
    type Error: Display + Send;

    fn fetch_page(&self, page: u32, limit: u32) -> impl Future<Output = Result<Page<T>, Self::Error>> + Send;
}

/// A [`PageSource`] backed by a closure; see [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnSource<F>(F);

/// Wrap a `Fn(page, limit) -> Future<Output = Result<Page<T>, E>>` as a page source.
pub fn from_fn<F, Fut>(f: F) -> FnSource<F>
where
    F: Fn(u32, u32) -> Fut,
{
    FnSource(f)
}

impl<T, E, F, Fut> PageSource<T> for FnSource<F>
where
    F: Fn(u32, u32) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T>, E>> + Send,
    E: Display + Send,
{
    type Error = E;

    fn fetch_page(&self, page: u32, limit: u32) -> impl Future<Output = Result<Page<T>, E>> + Send { (self.0)(page, limit) }
}
