#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! JSON HTTP transport for the tenancy console
//!
//! A hyper-based client with:
//! - TLS via rustls (HTTPS only unless insecure HTTP is explicitly allowed)
//! - Connection pooling
//! - Per-request timeout (tower)
//! - Default headers on every request (User-Agent, XSRF, static auth)
//! - Response body size limits
//!
//! No retries: failures surface to the caller as [`HttpError`].
//!
//! # Example
//!
//! ```ignore
//! use tenancy_http::HttpClient;
//!
//! let client = HttpClient::builder().user_agent("tenantctl/0.1").build()?;
//! let current: String = client
//!     .get("https://dashboards.example.com/api/v1/multitenancy/tenant")
//!     .send()
//!     .await?
//!     .text()
//!     .await?;
//! ```

mod builder;
mod client;
mod config;
mod error;
mod request;
mod response;
mod tls;

pub use builder::HttpClientBuilder;
pub use client::HttpClient;
pub use config::{
    DEFAULT_MAX_BODY_SIZE, DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT, ERROR_BODY_PREVIEW_LIMIT,
    HttpClientConfig, TransportSecurity,
};
pub use error::{HttpError, InvalidUriKind};
pub use request::RequestBuilder;
pub use response::{HttpResponse, ResponseBody};
