//! # mf-auth
//!
//! Marketingforce authentication.
//!
//! ## Security
//!
//! - The client secret and bearer tokens are redacted in Debug output
//! - Tracing spans never record the secret or the token
//!
//! ## Example
//!
//! ```rust,ignore
//! use marketingforce_auth::{ClientCredentials, ClientLogin, TokenStore};
//! use marketingforce_client::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), marketingforce_auth::Error> {
//!     let creds = ClientCredentials::from_env()?;
//!     let api = ApiClient::new(creds.host())?;
//!
//!     let tokens = TokenStore::new();
//!     let token = ClientLogin::new(creds).authenticate(&api).await?;
//!     tokens.store(&token);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod login;
mod token;

pub use credentials::ClientCredentials;
pub use login::{ClientLogin, LOGIN_PATH};
pub use marketingforce_client::{Error, ErrorKind, Result};
pub use token::{TokenInfo, TokenStore};
