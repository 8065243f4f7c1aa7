//! Core HTTP client bound to one Marketingforce host.

use tracing::{debug, info, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::Response;

/// HTTP client for the Marketingforce API.
///
/// Wraps a single `reqwest::Client` (and so a single connection pool) built
/// once for the configured host. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct MfHttpClient {
    inner: reqwest::Client,
    base_url: String,
    config: ClientConfig,
}

impl MfHttpClient {
    /// Create a new HTTP client for `host`.
    ///
    /// `host` must be an absolute `http(s)` URL; a trailing slash is ignored.
    pub fn new(host: &str, config: ClientConfig) -> Result<Self> {
        let parsed = Url::parse(host)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Invalid host scheme '{}': expected http or https",
                parsed.scheme()
            )));
        }

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent);

        if config.accept_compressed {
            builder = builder.gzip(true).deflate(true);
        } else {
            builder = builder.gzip(false).deflate(false);
        }

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            base_url: host.trim_end_matches('/').to_string(),
            config,
        })
    }

    /// Create a new HTTP client with default configuration.
    pub fn with_defaults(host: &str) -> Result<Self> {
        Self::new(host, ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The host every request is sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Create a POST request builder.
    pub fn post(&self, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(path)
    }

    /// Send a request once.
    ///
    /// Transport failures and non-2xx statuses are returned as errors; the
    /// body of a 2xx response is left for the caller to decode.
    #[instrument(skip(self, request), fields(path = %request.path))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let url = self.url(&request.path);
        let mut req = self.inner.post(&url);

        if let Some(ref token) = request.bearer_token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        if self.config.accept_compressed {
            req = req.header("Accept-Encoding", "gzip, deflate");
        }

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        if self.config.enable_tracing {
            debug!(url = %url, "Sending request");
        }

        let response = req.send().await?;
        let status = response.status();

        if self.config.enable_tracing {
            let content_length = response.content_length();
            if status.is_success() {
                debug!(status = status.as_u16(), content_length, "Response received");
            } else {
                info!(status = status.as_u16(), content_length, "Non-success response");
            }
        }

        if !status.is_success() {
            return Err(Error::new(ErrorKind::Http {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            }));
        }

        Ok(Response::new(response))
    }
}
