//! HTTP request building.
//!
//! Every Marketingforce endpoint is a JSON `POST`, so a request is just a
//! path, an optional body and an optional bearer token.

use serde::Serialize;

use crate::error::Result;

/// Builder for a single POST against the configured host.
///
/// `path` is relative to the host the [`MfHttpClient`](crate::MfHttpClient)
/// was built for.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) path: String,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) bearer_token: Option<String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: None,
            bearer_token: None,
        }
    }

    /// Set the bearer token for authentication.
    ///
    /// An empty token is still sent (`Authorization: Bearer `).
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the JSON body. `Content-Type: application/json` is sent with it.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// The request path.
    pub fn path(&self) -> &str {
        &self.path
    }
}
