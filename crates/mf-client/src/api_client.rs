//! Envelope-aware dispatcher shared by the auth and domain crates.
//!
//! `ApiClient` owns the [`MfHttpClient`] for one host and turns a
//! `(path, bearer, body)` triple into either the envelope's payload or a
//! single error. There is exactly one error path: transport failure,
//! undecodable body, or non-zero `code`.
//!
//! ## Security
//!
//! - Bearer tokens and request bodies are skipped in tracing spans

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::MfHttpClient;
use crate::config::ClientConfig;
use crate::envelope::ApiEnvelope;
use crate::error::Result;
use crate::response::Response;

/// Marketingforce API dispatcher.
///
/// # Example
///
/// ```rust,ignore
/// use marketingforce_client::ApiClient;
///
/// let api = ApiClient::new("https://open.example.com")?;
/// let accounts: serde_json::Value = api
///     .post("/business/wxAcc/list", Some(token), &serde_json::json!({"pageNum": 1}))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: MfHttpClient,
}

impl ApiClient {
    /// Create a dispatcher for `host` with the default HTTP configuration.
    pub fn new(host: &str) -> Result<Self> {
        Self::with_config(host, ClientConfig::default())
    }

    /// Create a dispatcher for `host` with custom HTTP configuration.
    pub fn with_config(host: &str, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: MfHttpClient::new(host, config)?,
        })
    }

    /// The configured host.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// POST a JSON body and return the 2xx response with its body unread.
    ///
    /// With `bearer` set, `Authorization: Bearer <token>` is attached as-is,
    /// even when the token is empty.
    #[instrument(
        skip(self, bearer, body),
        fields(path = %path, authenticated = bearer.is_some())
    )]
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: &B,
    ) -> Result<Response> {
        let mut request = self.http.post(path).json(body)?;
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        self.http.execute(request).await
    }

    /// POST a JSON body and return the whole successful envelope.
    pub async fn post_envelope<B: Serialize + ?Sized>(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: &B,
    ) -> Result<ApiEnvelope> {
        self.send(path, bearer, body).await?.envelope().await
    }

    /// POST a JSON body and deserialize the envelope's `data`.
    ///
    /// A missing `data` field deserializes from `null`.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: &B,
    ) -> Result<T> {
        self.post_envelope(path, bearer, body).await?.data_as()
    }
}
