//! Layered client configuration.
//!
//! Sources are merged in order: built-in defaults, then an optional TOML
//! file, then `HEARTH_`-prefixed environment variables where `__` separates
//! sections (`HEARTH_API__BASE_URL`, `HEARTH_RETRY__MAX_RETRIES`).

use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use hearth_rate::RateLimitConfig;
use hearth_retry::RetryPolicy;
use hearth_scroll::ScrollOptions;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const ENV_PREFIX: &str = "HEARTH_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Root every request path is joined onto.
    ///
    /// Default: http://localhost:3001/api
    pub base_url: String,

    /// Per-attempt request timeout in milliseconds.
    ///
    /// Default: 15000
    pub timeout_ms: u64,

    /// Bearer token sent with every request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url:   "http://localhost:3001/api".to_string(),
            timeout_ms: 15_000,
            token:      None,
        }
    }
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn timeout_duration(&self) -> Duration { Duration::from_millis(self.timeout_ms) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HearthConfig {
    pub api:           ApiSettings,
    pub retry:         RetryPolicy,
    /// Contact form submissions allowed per sender.
    ///
    /// Default: 3 per 60s
    pub contact_limit: RateLimitConfig,
    pub scroll:        ScrollOptions,
}

impl Default for HearthConfig {
    fn default() -> Self {
        Self {
            api:           ApiSettings::default(),
            retry:         RetryPolicy::default(),
            contact_limit: RateLimitConfig::new(3, Duration::from_secs(60)),
            scroll:        ScrollOptions::default(),
        }
    }
}

impl HearthConfig {
    /// The merged provider chain, before extraction.
    ///
    /// An explicit `path` must exist; without one only defaults and the
    /// environment apply.
    pub fn figment(path: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(HearthConfig::default()));
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::Missing(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> { Ok(Self::figment(path)?.extract()?) }
}
