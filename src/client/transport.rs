//! Pluggable HTTP transport.
//!
//! The voting operations only need "GET this URL, give me the body". Keeping
//! that behind a trait lets the catalog and resolver logic run against a
//! scripted transport in tests.

use tracing::debug;

use super::config::ClientConfig;
use crate::error::{ConfigError, FetchError};

/// Blocking HTTP GET returning the response body as text.
pub trait HttpTransport: Send + Sync {
    /// Fetches `url` with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] on connection failures, timeouts,
    /// and non-2xx status codes. Implementations must not decode the body.
    fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, FetchError>;
}

/// [`HttpTransport`] backed by `reqwest`'s blocking client.
///
/// Must not be created or dropped inside an async runtime.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Builds a client with the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, FetchError> {
        debug!(url, ?query, "GET");
        let response = self
            .client
            .get(url)
            .query(query)
            .send()?
            .error_for_status()?;
        let status = response.status();
        let body = response.text()?;
        debug!(url, %status, bytes = body.len(), "response received");
        Ok(body)
    }
}
