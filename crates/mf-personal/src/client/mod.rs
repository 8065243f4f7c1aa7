//! Marketingforce personal-account API client.
//!
//! This client owns the dispatcher, the credentials and the token cache, and
//! provides one method per remote operation. The operations are grouped by
//! area in the submodules.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use marketingforce_auth::{ClientCredentials, ClientLogin, TokenInfo, TokenStore};
use marketingforce_client::{ApiClient, ClientConfig};

use crate::Result;

mod accounts;
mod callbacks;
mod friends;
mod materials;
mod messages;

/// Marketingforce API client.
///
/// Provides:
/// - Token handling (`get_token`, `set_token`)
/// - Personal and enterprise (WeCom) account listing
/// - Private messages
/// - Enterprise friend lookup and robot friend sync
/// - Material library queries
/// - Callback subscriptions
///
/// Every operation POSTs its parameters unchanged as the JSON body, sends
/// whatever token is currently cached, and returns the envelope's `data`.
/// The client never logs in on its own: call [`get_token`](Self::get_token)
/// or [`set_token`](Self::set_token) first.
///
/// Clones share the HTTP connection pool and the token cache.
///
/// # Example
///
/// ```rust,ignore
/// use marketingforce_personal::{ClientCredentials, MarketingforceClient};
/// use serde_json::json;
///
/// let client = MarketingforceClient::new(ClientCredentials::new(
///     "https://open.example.com",
///     "client-key",
///     "client-secret",
/// )?)?;
///
/// let token = client.get_token().await?;
///
/// let accounts = client
///     .list_personal_accounts(&json!({"pageNum": 1, "pageSize": 20}))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct MarketingforceClient {
    api: ApiClient,
    login: ClientLogin,
    tokens: TokenStore,
}

impl MarketingforceClient {
    /// Create a client. No network call is made.
    pub fn new(credentials: ClientCredentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(credentials: ClientCredentials, config: ClientConfig) -> Result<Self> {
        let api = ApiClient::with_config(credentials.host(), config)?;
        Ok(Self::from_parts(credentials, api))
    }

    /// Create a client around an existing dispatcher.
    ///
    /// Requests go to the dispatcher's host; the credentials are only used
    /// for login.
    pub fn from_parts(credentials: ClientCredentials, api: ApiClient) -> Self {
        Self {
            api,
            login: ClientLogin::new(credentials),
            tokens: TokenStore::new(),
        }
    }

    /// Get the underlying dispatcher.
    pub fn inner(&self) -> &ApiClient {
        &self.api
    }

    /// Get the credentials.
    pub fn credentials(&self) -> &ClientCredentials {
        self.login.credentials()
    }

    /// Return the cached token, logging in first if none is held.
    ///
    /// Once a token is cached this is a pure read: no staleness check, no
    /// request. Check [`TokenInfo::expires_in`] and call
    /// [`set_token`](Self::set_token) when a token needs replacing.
    #[instrument(skip(self))]
    pub async fn get_token(&self) -> Result<TokenInfo> {
        if let Some(token) = self.tokens.current() {
            debug!("Using cached token");
            return Ok(token);
        }

        let token = self.login.authenticate(&self.api).await?;
        self.tokens.store(&token);
        Ok(token)
    }

    /// Overwrite the cached token value; the cached expiry is kept.
    ///
    /// For tokens obtained or shared outside this client.
    pub fn set_token(&self, token: impl Into<String>) {
        self.tokens.set_token(token);
    }

    /// The cached token, without logging in.
    pub fn token(&self) -> Option<TokenInfo> {
        self.tokens.current()
    }

    /// POST `params` to an arbitrary endpoint and return the envelope's `data`.
    pub async fn call<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Value> {
        self.dispatch(path, params).await
    }

    /// Like [`call`](Self::call), deserializing `data` into `T`.
    pub async fn call_json<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> Result<T> {
        self.dispatch(path, params).await
    }

    async fn dispatch<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> Result<T> {
        let bearer = self.tokens.bearer();
        self.api.post(path, Some(&bearer), params).await
    }
}
