//! Client configuration with builder pattern and environment variable support.
//!
//! Configuration is resolved in order: explicit values → environment variables → defaults.

use std::time::Duration;

use crate::error::ConfigError;

/// CKAN `package_show` action on opendata.swiss.
pub const DEFAULT_CATALOG_URL: &str = "https://ckan.opendata.swiss/api/3/action/package_show";
/// Dataset of real-time federal vote results at municipality level.
pub const DEFAULT_DATASET_ID: &str =
    "echtzeitdaten-zu-den-eidgenossischen-abstimmungen-gemeindestand-am-datum-der-abstimmung";
/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`VotingClient`](super::VotingClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Dataset-description endpoint.
    pub catalog_url: String,
    /// Value of the `id` query parameter sent to the catalog endpoint.
    pub dataset_id: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a new builder for `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Creates configuration from environment variables with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an environment value is empty or zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder().from_env().build()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            dataset_id: DEFAULT_DATASET_ID.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    catalog_url: Option<String>,
    dataset_id: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Populates unset fields from environment variables.
    ///
    /// Reads `SWISSVOTE_CATALOG_URL`, `SWISSVOTE_DATASET_ID` and
    /// `SWISSVOTE_TIMEOUT_SECS`. Unparsable timeouts are ignored.
    #[must_use]
    pub fn from_env(mut self) -> Self {
        if self.catalog_url.is_none() {
            self.catalog_url = std::env::var("SWISSVOTE_CATALOG_URL").ok();
        }
        if self.dataset_id.is_none() {
            self.dataset_id = std::env::var("SWISSVOTE_DATASET_ID").ok();
        }
        if self.timeout.is_none() {
            self.timeout = std::env::var("SWISSVOTE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs);
        }
        self
    }

    /// Sets the catalog endpoint.
    #[must_use]
    pub fn catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = Some(url.into());
        self
    }

    /// Sets the dataset identifier.
    #[must_use]
    pub fn dataset_id(mut self, id: impl Into<String>) -> Self {
        self.dataset_id = Some(id.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] for a blank URL or dataset id and
    /// [`ConfigError::ZeroTimeout`] for a zero timeout.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let catalog_url = self
            .catalog_url
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        if catalog_url.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "catalog_url",
            });
        }

        let dataset_id = self
            .dataset_id
            .unwrap_or_else(|| DEFAULT_DATASET_ID.to_string());
        if dataset_id.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "dataset_id",
            });
        }

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(ClientConfig {
            catalog_url,
            dataset_id,
            timeout,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
        })
    }
}
