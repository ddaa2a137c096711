//! The voting client and its construction.

use super::config::ClientConfig;
use super::transport::{HttpTransport, ReqwestTransport};
use crate::error::ConfigError;

/// Stateless client for the opendata.swiss voting dataset.
///
/// Every operation performs its own requests; nothing is cached between
/// calls. See [`fetch_catalog`](Self::fetch_catalog) and
/// [`resolve_summary`](Self::resolve_summary).
#[derive(Debug, Clone)]
pub struct VotingClient<T = ReqwestTransport> {
    pub(super) transport: T,
    pub(super) config: ClientConfig,
}

impl VotingClient<ReqwestTransport> {
    /// Creates a client backed by `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self { transport, config })
    }

    /// Creates a client from environment variables with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for invalid environment values or if the
    /// HTTP client cannot be built.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: HttpTransport> VotingClient<T> {
    /// Creates a client over a custom transport.
    pub const fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}
