//! Client credentials: the host to talk to and the key/secret pair used to
//! log in.
//!
//! The secret is redacted in Debug output.

use marketingforce_client::{Error, Result};

/// Environment variables read by [`ClientCredentials::from_env`], each with
/// its short fallback.
const HOST_VARS: [&str; 2] = ["MARKETINGFORCE_HOST", "MF_HOST"];
const KEY_VARS: [&str; 2] = ["MARKETINGFORCE_KEY", "MF_KEY"];
const SECRET_VARS: [&str; 2] = ["MARKETINGFORCE_SECRET", "MF_SECRET"];

/// Validated `host`/`key`/`secret` triple.
///
/// Immutable once built. All three fields are guaranteed non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    host: String,
    key: String,
    secret: String,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("host", &self.host)
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl ClientCredentials {
    /// Create credentials, failing on the first missing field.
    ///
    /// Fields are checked in the order `host`, `key`, `secret`; an empty or
    /// whitespace-only value counts as missing. The error message has the
    /// form `Missing Config -- [host]`.
    pub fn new(
        host: impl Into<String>,
        key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self> {
        let host = host.into();
        let key = key.into();
        let secret = secret.into();

        for (name, value) in [("host", &host), ("key", &key), ("secret", &secret)] {
            if value.trim().is_empty() {
                return Err(Error::config(format!("Missing Config -- [{}]", name)));
            }
        }

        Ok(Self { host, key, secret })
    }

    /// Load credentials from environment variables.
    ///
    /// Reads `MARKETINGFORCE_HOST`, `MARKETINGFORCE_KEY` and
    /// `MARKETINGFORCE_SECRET`, falling back to `MF_HOST`, `MF_KEY` and
    /// `MF_SECRET`. Unset variables fail exactly like [`Self::new`].
    pub fn from_env() -> Result<Self> {
        Self::new(env_var(&HOST_VARS), env_var(&KEY_VARS), env_var(&SECRET_VARS))
    }

    /// Base host, e.g. `https://open.example.com`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Client id sent as `clientId` on login.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Client secret sent as `clientSecret` on login.
    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }
}

fn env_var(names: &[&str]) -> String {
    names
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
        .unwrap_or_default()
}
