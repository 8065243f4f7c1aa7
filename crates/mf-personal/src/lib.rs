//! # mf-personal
//!
//! Marketingforce personal-account (WeChat / WeCom) API client.
//!
//! ## Features
//!
//! - **Token handling** - client-credentials login with an in-memory token cache
//! - **Accounts** - personal and enterprise personal account lists
//! - **Messages** - private messages from a personal account
//! - **Friends** - enterprise friend lookup, robot friend sync
//! - **Materials** - material library queries
//! - **Callbacks** - personal-account event subscriptions
//!
//! ## Example
//!
//! ```rust,ignore
//! use marketingforce_personal::{ClientCredentials, MarketingforceClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), marketingforce_personal::Error> {
//!     let client = MarketingforceClient::new(ClientCredentials::from_env()?)?;
//!     client.get_token().await?;
//!
//!     let materials = client
//!         .list_materials(&serde_json::json!({"pageNum": 1, "pageSize": 10}))
//!         .await?;
//!     println!("{materials}");
//!
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;

pub use client::MarketingforceClient;
pub use marketingforce_auth::{ClientCredentials, TokenInfo};
pub use marketingforce_client::{ApiEnvelope, ClientConfig, Error, ErrorKind, Result};
