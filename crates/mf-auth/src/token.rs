//! In-memory bearer token cache.
//!
//! One [`TokenStore`] belongs to one client instance; clones of that client
//! share it. The store never expires or refreshes anything on its own:
//! `expires_in` is reported back to the caller, who decides when to log in
//! again or inject a new token.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

/// A bearer token and the lifetime the server reported for it.
///
/// The token is redacted in Debug output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Bearer token value.
    pub token: String,
    /// Seconds until expiry, as sent by the login endpoint (`expiredTime`).
    /// `None` when the token was injected and no login has happened.
    pub expires_in: Option<i64>,
}

impl std::fmt::Debug for TokenInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenInfo")
            .field("token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[derive(Default)]
struct TokenState {
    value: String,
    expires_in: Option<i64>,
}

/// Shared, per-client token cache.
#[derive(Clone, Default)]
pub struct TokenStore {
    state: Arc<RwLock<TokenState>>,
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("TokenStore")
            .field("has_token", &!state.value.is_empty())
            .field("expires_in", &state.expires_in)
            .finish()
    }
}

impl TokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached token, or `None` if no non-empty token is held.
    pub fn current(&self) -> Option<TokenInfo> {
        let state = self.read();
        if state.value.is_empty() {
            return None;
        }
        Some(TokenInfo {
            token: state.value.clone(),
            expires_in: state.expires_in,
        })
    }

    /// The value to put after `Bearer `. Empty when nothing is cached.
    pub fn bearer(&self) -> String {
        self.read().value.clone()
    }

    /// Overwrite the token value. The cached expiry is left untouched.
    pub fn set_token(&self, token: impl Into<String>) {
        self.write().value = token.into();
    }

    /// Replace both value and expiry, e.g. after a successful login.
    pub fn store(&self, info: &TokenInfo) {
        let mut state = self.write();
        state.value = info.token.clone();
        state.expires_in = info.expires_in;
    }

    // A panic while holding the lock cannot leave the two plain fields in a
    // torn state, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, TokenState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TokenState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
