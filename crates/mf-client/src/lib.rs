//! # mf-client
//!
//! Core HTTP client infrastructure for the Marketingforce API.
//!
//! This crate provides:
//! - A reqwest client built once per host and reused for every call
//! - JSON request bodies with bearer authentication
//! - Decoding of the `{code, message, data}` response envelope
//! - The shared [`Error`] type used by every marketingforce crate
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (mf-auth login, mf-personal domain operations)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       ApiClient                             │
//! │  - POSTs JSON with an optional bearer token                 │
//! │  - Decodes the envelope, raises on code != 0                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     MfHttpClient                            │
//! │  - One reqwest connection pool per host                     │
//! │  - Non-2xx statuses become transport errors                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use marketingforce_client::{ApiClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), marketingforce_client::Error> {
//!     let api = ApiClient::with_config(
//!         "https://open.example.com",
//!         ClientConfig::builder().with_tracing(false).build(),
//!     )?;
//!
//!     let data: serde_json::Value = api
//!         .post("/business/wxAcc/list", Some("token"), &serde_json::json!({}))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod api_client;
mod client;
mod config;
mod envelope;
mod error;
mod request;
mod response;

pub use api_client::ApiClient;
pub use client::MfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use envelope::{decode_envelope, lenient_integer, ApiEnvelope};
pub use error::{Error, ErrorKind, Result};
pub use request::RequestBuilder;
pub use response::Response;

/// Message used when a failed envelope carries no `message`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// Message carried by every [`ErrorKind::InvalidResponse`] raised by the decoder.
pub const INVALID_RESPONSE_MESSAGE: &str = "invalid response";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("marketingforce-rs/", env!("CARGO_PKG_VERSION"));
