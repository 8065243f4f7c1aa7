//! Client-credentials login.
//!
//! `POST /thirdparty/user/login/client` with `{clientId, clientSecret}`
//! answers `{code: 0, data: {value, expiredTime}}`.
//!
//! Unlike the other endpoints, a login body that is not a usable envelope
//! is reported as a rejected login (`code 1`, "unknown error") rather than
//! as an invalid response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use marketingforce_client::{lenient_integer, ApiClient, ApiEnvelope, Error, ErrorKind, Result};

use crate::credentials::ClientCredentials;
use crate::token::TokenInfo;

/// Login endpoint path.
pub const LOGIN_PATH: &str = "/thirdparty/user/login/client";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginData {
    value: String,
    #[serde(default)]
    expired_time: Option<Value>,
}

/// Exchanges a client key/secret for a bearer token.
#[derive(Debug, Clone)]
pub struct ClientLogin {
    credentials: ClientCredentials,
}

impl ClientLogin {
    /// Create a login helper for the given credentials.
    pub fn new(credentials: ClientCredentials) -> Self {
        Self { credentials }
    }

    /// Get the credentials.
    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    /// Log in and return the issued token.
    ///
    /// No `Authorization` header is sent. A non-zero or missing envelope
    /// code fails with [`ErrorKind::RemoteApi`], and so does a body that is
    /// not JSON. A success envelope without `data.value` fails with
    /// [`ErrorKind::InvalidResponse`]. An `expiredTime` that is not a number
    /// is dropped.
    #[instrument(skip_all, fields(client_id = %self.credentials.key()))]
    pub async fn authenticate(&self, api: &ApiClient) -> Result<TokenInfo> {
        let request = LoginRequest {
            client_id: self.credentials.key(),
            client_secret: self.credentials.secret(),
        };

        let body = api.send(LOGIN_PATH, None, &request).await?.text().await?;
        let envelope = ApiEnvelope::from_body(&body).into_result()?;
        let data: LoginData = envelope.data_as().map_err(|e| {
            let message = marketingforce_client::INVALID_RESPONSE_MESSAGE.to_string();
            Error::with_source(ErrorKind::InvalidResponse(message), e)
        })?;

        let expires_in = data.expired_time.as_ref().and_then(lenient_integer);
        info!(expires_in = ?expires_in, "Obtained access token");

        Ok(TokenInfo {
            token: data.value,
            expires_in,
        })
    }
}
