use std::sync::Arc;

use hearth_rate::FixedWindowLimiter;
use hearth_retry::{RetryOptions, RetryPolicy, with_retry};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::contact::ContactService;
use super::http::{ApiRequest, ApiResponse, HttpClient, Method};
use super::resource::Resource;
use crate::config::{ApiSettings, HearthConfig};
use crate::data::{Agent, Condominium, Notification, Property};
use crate::error::{ApiError, Result};

/// Typed client for the listings backend.
///
/// Every call is resolved against [`ApiSettings::base_url`], bounded by the
/// configured timeout and retried under the client's [`RetryPolicy`].
pub struct ApiClient<C> {
    http:            C,
    settings:        ApiSettings,
    retry:           RetryOptions<ApiError>,
    contact_limiter: Arc<FixedWindowLimiter>,
}

impl<C: HttpClient> ApiClient<C> {
    /// Fails with [`ApiError::InvalidUrl`] unless the base URL is http(s).
    pub fn new(http: C, settings: ApiSettings) -> Result<Self> {
        let config = HearthConfig::default();
        Self::with_parts(http, settings, config.retry, Arc::new(FixedWindowLimiter::new(config.contact_limit)))
    }

    pub fn from_config(http: C, config: &HearthConfig) -> Result<Self> {
        Self::with_parts(
            http,
            config.api.clone(),
            config.retry.clone(),
            Arc::new(FixedWindowLimiter::new(config.contact_limit)),
        )
    }

    fn with_parts(
        http: C,
        settings: ApiSettings,
        policy: RetryPolicy,
        contact_limiter: Arc<FixedWindowLimiter>,
    ) -> Result<Self> {
        validate_base_url(&settings.base_url)?;
        Ok(Self {
            http,
            settings,
            retry: retry_options(policy),
            contact_limiter,
        })
    }

    #[must_use]
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = retry_options(policy);
        self
    }

    pub fn settings(&self) -> &ApiSettings { &self.settings }

    pub fn policy(&self) -> &RetryPolicy { &self.retry.policy }

    pub fn http(&self) -> &C { &self.http }

    /// `base_url` joined with `path`, with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Send a request built from the parts, applying timeout, status
    /// mapping and retries.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Vec<u8>>,
    ) -> Result<ApiResponse> {
        let mut request = ApiRequest::new(method, self.url(path));
        request.query = query.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect();
        request.headers.push(("Accept".to_string(), "application/json".to_string()));
        if let Some(ref token) = self.settings.token {
            request.headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        request.body = body;

        debug!(%method, url = %request.url, "sending request");
        with_retry(&self.retry, move || self.send_once(request.clone())).await
    }

    async fn send_once(&self, request: ApiRequest) -> Result<ApiResponse> {
        let timeout = self.settings.timeout_duration();
        let response = match tokio::time::timeout(timeout, self.http.send(request)).await {
            Err(_) => return Err(ApiError::Timeout(timeout)),
            Ok(Err(err)) => return Err(ApiError::Network(err.to_string())),
            Ok(Ok(response)) => response,
        };

        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body:   response.text(),
            });
        }
        Ok(response)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        self.execute(Method::Get, path, query, None).await?.json()
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        self.execute(Method::Post, path, &[], Some(body)).await?.json()
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        self.execute(Method::Put, path, &[], Some(body)).await?.json()
    }

    /// The response body, if any, is ignored.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::Delete, path, &[], None).await?;
        Ok(())
    }

    pub fn resource<T>(&self, path: impl Into<String>) -> Resource<'_, T, C> { Resource::new(self, path) }

    pub fn properties(&self) -> Resource<'_, Property, C> { self.resource("properties") }

    pub fn agents(&self) -> Resource<'_, Agent, C> { self.resource("agents") }

    pub fn condominiums(&self) -> Resource<'_, Condominium, C> { self.resource("condominiums") }

    pub fn notifications(&self) -> Resource<'_, Notification, C> { self.resource("notifications") }

    /// Contact form submissions, sharing this client's per-sender limiter.
    pub fn contacts(&self) -> ContactService<'_, C> { ContactService::new(self, Arc::clone(&self.contact_limiter)) }

    /// Resolve a gallery slug to its property.
    ///
    /// `Ok(None)` when the slug does not decode or the backend has no such
    /// property.
    pub async fn property_by_slug(&self, slug: &str) -> Result<Option<Property>> {
        let Some(id) = hearth_slug::decode_str(slug) else {
            debug!(slug, "slug does not decode to an id");
            return Ok(None);
        };
        match self.properties().get(id).await {
            Ok(property) => Ok(Some(property)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

fn retry_options(policy: RetryPolicy) -> RetryOptions<ApiError> {
    RetryOptions::new(policy).on_retry(Arc::new(|attempt: u32, err: &ApiError| {
        warn!(attempt, error = %err, "request failed, retrying");
    }))
}

fn validate_base_url(base_url: &str) -> Result<()> {
    let rest = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))
        .ok_or_else(|| ApiError::InvalidUrl(base_url.to_string()))?;
    if rest.is_empty() || rest.starts_with('/') {
        return Err(ApiError::InvalidUrl(base_url.to_string()));
    }
    Ok(())
}
