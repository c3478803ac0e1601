use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use hearth_scroll::{Page, PageSource};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::client::ApiClient;
use super::http::HttpClient;
use crate::error::{ApiError, Result};

/// CRUD access to one collection endpoint, e.g. `/properties`.
///
/// Listing is paged with zero-based `page` and `limit` query parameters,
/// and the endpoint answers with a [`Page`].
pub struct Resource<'a, T, C> {
    client:  &'a ApiClient<C>,
    path:    String,
    _record: PhantomData<fn() -> T>,
}

impl<'a, T, C> Resource<'a, T, C> {
    pub(crate) fn new(client: &'a ApiClient<C>, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into().trim_matches('/').to_string(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &str { &self.path }

    fn item_path(&self, id: u64) -> String { format!("{}/{id}", self.path) }
}

impl<T, C> Resource<'_, T, C>
where
    T: DeserializeOwned,
    C: HttpClient,
{
    pub async fn list(&self, page: u32, limit: u32) -> Result<Page<T>> {
        let query = [("page", page.to_string()), ("limit", limit.to_string())];
        self.client.get_json(&self.path, &query).await
    }

    pub async fn get(&self, id: u64) -> Result<T> { self.client.get_json(&self.item_path(id), &[]).await }

    pub async fn create<B: Serialize + ?Sized>(&self, body: &B) -> Result<T> { self.client.post_json(&self.path, body).await }

    pub async fn update<B: Serialize + ?Sized>(&self, id: u64, body: &B) -> Result<T> {
        self.client.put_json(&self.item_path(id), body).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> { self.client.delete(&self.item_path(id)).await }
}

impl<T, C> PageSource<T> for Resource<'_, T, C>
where
    T: DeserializeOwned + Send,
    C: HttpClient,
{
    type Error = ApiError;

    fn fetch_page(&self, page: u32, limit: u32) -> impl Future<Output = Result<Page<T>>> + Send { self.list(page, limit) }
}

impl<T, C> fmt::Debug for Resource<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
