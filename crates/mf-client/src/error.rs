//! Error types for mf-client.
//!
//! A single error type is shared by every marketingforce crate so callers
//! only ever match on one [`ErrorKind`].

/// Result type alias for marketingforce operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for marketingforce operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Missing or malformed client configuration.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Response body that is not a usable envelope.
    pub fn invalid_response() -> Self {
        Self::new(ErrorKind::InvalidResponse(
            crate::INVALID_RESPONSE_MESSAGE.to_string(),
        ))
    }

    /// Envelope with a non-zero `code`.
    pub fn remote_api(code: i64, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RemoteApi {
            code,
            message: message.into(),
        })
    }

    /// Returns true if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Config(_))
    }

    /// Returns true if the response body could not be decoded as an envelope.
    pub fn is_invalid_response(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidResponse(_))
    }

    /// Returns true if the API rejected the call with a non-zero code.
    pub fn is_remote_api(&self) -> bool {
        matches!(self.kind, ErrorKind::RemoteApi { .. })
    }

    /// Returns the envelope code if this is a remote API error.
    pub fn remote_code(&self) -> Option<i64> {
        match &self.kind {
            ErrorKind::RemoteApi { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns true if this error came from the HTTP transport rather than
    /// from the envelope.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Http { .. }
                | ErrorKind::Timeout
                | ErrorKind::Connection(_)
                | ErrorKind::Other(_)
        )
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Invalid configuration (missing host/key/secret, bad host URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The response body was empty, not JSON, or a falsy JSON value.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The API answered with a non-zero envelope code.
    #[error("Marketingforce API error: {code} - {message}")]
    RemoteApi { code: i64, message: String },

    /// HTTP request failed with a non-success status.
    #[error("HTTP error: {status} {message}")]
    Http { status: u16, message: String },

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON serialization error for a request body.
    #[error("JSON error: {0}")]
    Json(String),

    /// Other transport error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            ErrorKind::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_builder() {
            ErrorKind::Config(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
