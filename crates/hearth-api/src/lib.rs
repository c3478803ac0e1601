//! Typed client for the listings backend.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Records exchanged with the backend
//! - [`config`] - Layered settings (defaults, TOML, environment)
//! - [`effects`] - The transport seam and everything that awaits it
//!
//! # Key Features
//!
//! - **Strict records**: required fields are checked when a response is decoded
//! - **Retried calls**: every request runs under a [`RetryPolicy`](hearth_retry::RetryPolicy),
//!   with each retry logged at `warn`
//! - **Paged resources**: a [`Resource`] is a [`PageSource`](hearth_scroll::PageSource),
//!   so it can feed an [`InfiniteScroll`](hearth_scroll::InfiniteScroll) directly
//! - **Guarded forms**: contact submissions are rate limited per sender before
//!   anything reaches the network
//!
//! # Example
//!
//! ```no_run
//! use hearth_api::{ApiClient, ApiSettings, ReqwestClient};
//!
//! # async fn run() -> hearth_api::Result<()> {
//! let client = ApiClient::new(ReqwestClient::new(), ApiSettings::new("https://crm.example.com/api"))?;
//! let first = client.properties().list(0, 12).await?;
//! for property in &first.data {
//!     println!("{} {}", property.title, property.gallery_path());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod effects;
mod error;

pub use config::{ApiSettings, HearthConfig};
pub use data::{
    Address, Agent, Condominium, Contact, Money, NewContact, Notification, NotificationKind, Property, PropertyKind,
    PropertyStatus,
};
#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;
pub use effects::{ApiClient, ApiRequest, ApiResponse, ContactService, HttpClient, Method, Resource};
pub use error::{ApiError, ConfigError, Result};
