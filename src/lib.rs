//! # marketingforce
//!
//! A Rust client library for the Marketingforce personal-account API.
//!
//! ## Security
//!
//! - The client secret and bearer tokens are redacted in Debug output
//! - Tracing/logging skips credential parameters
//!
//! ## Crates
//!
//! - **marketingforce-client** - Core HTTP client, envelope decoding, shared error type
//! - **marketingforce-auth** - Client credentials, client login, token cache
//! - **marketingforce-personal** - Named API operations (accounts, messages,
//!   friends, materials, callbacks)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marketingforce::{ClientCredentials, MarketingforceClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarketingforceClient::new(ClientCredentials::new(
//!         "https://open.example.com",
//!         "client-key",
//!         "client-secret",
//!     )?)?;
//!
//!     let token = client.get_token().await?;
//!     println!("token expires in {:?}s", token.expires_in);
//!
//!     let accounts = client
//!         .list_personal_accounts(&serde_json::json!({"pageNum": 1, "pageSize": 20}))
//!         .await?;
//!     println!("{accounts}");
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use marketingforce_auth as auth;
#[cfg(feature = "client")]
pub use marketingforce_client as client;
#[cfg(feature = "personal")]
pub use marketingforce_personal as personal;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use marketingforce_auth::{ClientCredentials, TokenInfo};
#[cfg(feature = "client")]
pub use marketingforce_client::{ApiEnvelope, ClientConfig, Error, ErrorKind, Result};
#[cfg(feature = "personal")]
pub use marketingforce_personal::MarketingforceClient;
