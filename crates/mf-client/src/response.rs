//! HTTP response handling.

use crate::envelope::{decode_envelope, ApiEnvelope};
use crate::error::Result;

/// A 2xx response whose body has not been read yet.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Read the body and decode it as a successful envelope.
    ///
    /// See [`decode_envelope`] for the failure cases.
    pub async fn envelope(self) -> Result<ApiEnvelope> {
        let body = self.text().await?;
        decode_envelope(&body)
    }
}
