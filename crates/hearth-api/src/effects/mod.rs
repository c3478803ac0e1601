//! Network-facing half of the crate.
//!
//! Everything that awaits the transport lives here; the records it moves
//! are in [`crate::data`].

mod client;
mod contact;
mod http;
mod resource;

pub use client::ApiClient;
pub use contact::ContactService;
pub use http::{ApiRequest, ApiResponse, HttpClient, Method};
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
pub use resource::Resource;
