//! Summary resolution: proposal name → matching resource → vote summary.

use tracing::{debug, warn};

use super::transport::HttpTransport;
use super::voting::VotingClient;
use crate::core::summary::ProposalRecord;
use crate::core::{OperationResult, ResourceDescriptor, VoteSummary, extract_search_term};
use crate::error::FetchError;

/// Fixed message for a detail payload without `schweiz.vorlagen`.
pub const NO_VOTING_RESULTS: &str = "Could not find voting results in the data";

impl<T: HttpTransport> VotingClient<T> {
    /// Resolves a proposal name to its national vote summary.
    ///
    /// Re-fetches the catalog on every call, takes the first resource whose
    /// English description contains the search term, downloads its detail
    /// payload, and summarizes the first proposal in it.
    pub fn resolve_summary(&self, proposal_name: &str) -> OperationResult<VoteSummary> {
        let result = self.try_resolve_summary(proposal_name);
        if let Err(ref e) = result {
            warn!(proposal = proposal_name, kind = %e.kind(), error = %e, "summary resolution failed");
        }
        result.into()
    }

    /// [`resolve_summary`](Self::resolve_summary) as a plain `Result`.
    ///
    /// # Errors
    ///
    /// Returns any [`FetchError`] class; catalog failures pass through
    /// unchanged.
    pub fn try_resolve_summary(&self, proposal_name: &str) -> Result<VoteSummary, FetchError> {
        let term = extract_search_term(proposal_name)?;
        debug!(term = %term, "searching for proposal");

        let catalog = self.try_fetch_catalog()?;
        let resource = find_resource(&catalog, &term).ok_or_else(|| FetchError::NotFound {
            proposal: proposal_name.to_string(),
        })?;
        debug!(description = %resource.description_en, url = %resource.download_url, "matched resource");

        if !resource.has_download_url() {
            return Err(FetchError::Unexpected(format!(
                "matched resource has no download URL: {}",
                resource.description_en
            )));
        }

        let body = self.transport.get_text(&resource.download_url, &[])?;
        parse_summary(&body)
    }
}

/// First descriptor whose description contains `term`.
///
/// First match, not best match: no scoring or ranking.
pub fn find_resource<'a>(
    catalog: &'a [ResourceDescriptor],
    term: &str,
) -> Option<&'a ResourceDescriptor> {
    catalog.iter().find(|d| d.matches(term))
}

/// Extracts the summary of the first proposal in a detail payload.
///
/// Payloads with several proposals are summarized by their first entry
/// only.
pub(crate) fn parse_summary(body: &str) -> Result<VoteSummary, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let first = value
        .get("schweiz")
        .and_then(|country| country.get("vorlagen"))
        .and_then(serde_json::Value::as_array)
        .and_then(|proposals| proposals.first())
        .ok_or_else(|| FetchError::Schema(NO_VOTING_RESULTS.to_string()))?;

    let record: ProposalRecord = serde_json::from_value(first.clone())
        .map_err(|e| FetchError::Unexpected(format!("malformed proposal: {e}")))?;
    if !record.has_titles() {
        return Err(FetchError::Unexpected(
            "proposal has no titles `vorlagenTitel`".to_string(),
        ));
    }

    let date = value
        .get("abstimmtag")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| FetchError::Unexpected("missing vote date `abstimmtag`".to_string()))?
        .to_string();

    Ok(VoteSummary::from_record(date, record))
}
