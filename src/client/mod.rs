//! HTTP client for the opendata.swiss federal voting dataset.
//!
//! [`VotingClient`] exposes the two public operations:
//!
//! ```text
//! fetch_catalog()          GET package_show?id=<dataset>  → Vec<ResourceDescriptor>
//! resolve_summary(name)    search term → fetch_catalog → first match
//!                          → GET download_url             → VoteSummary
//! ```
//!
//! Both return an [`OperationResult`] envelope and never fail past it.
//! The free functions below build a client from the environment for
//! one-off calls.

pub mod catalog;
pub mod config;
pub mod resolver;
pub mod transport;
pub mod voting;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::CATALOG_NOT_SUCCESSFUL;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_CATALOG_URL, DEFAULT_DATASET_ID};
pub use resolver::{NO_VOTING_RESULTS, find_resource};
pub use transport::{HttpTransport, ReqwestTransport};
pub use voting::VotingClient;

use crate::core::{OperationResult, ResourceDescriptor, VoteSummary};
use crate::error::FetchError;

/// Fetches the vote catalog with an environment-configured client.
pub fn fetch_catalog() -> OperationResult<Vec<ResourceDescriptor>> {
    match VotingClient::from_env() {
        Ok(client) => client.fetch_catalog(),
        Err(e) => OperationResult::err(&FetchError::Unexpected(e.to_string())),
    }
}

/// Resolves a proposal summary with an environment-configured client.
pub fn resolve_summary(proposal_name: &str) -> OperationResult<VoteSummary> {
    match VotingClient::from_env() {
        Ok(client) => client.resolve_summary(proposal_name),
        Err(e) => OperationResult::err(&FetchError::Unexpected(e.to_string())),
    }
}
