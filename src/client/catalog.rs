//! Catalog fetch: dataset description → resource descriptors.

use serde::Deserialize;
use tracing::{debug, warn};

use super::transport::HttpTransport;
use super::voting::VotingClient;
use crate::core::resource::RawResource;
use crate::core::{OperationResult, ResourceDescriptor};
use crate::error::FetchError;

/// Fixed message for a catalog response whose `success` flag is not true.
pub const CATALOG_NOT_SUCCESSFUL: &str = "API request was not successful";

/// CKAN action envelope.
#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    result: Option<CatalogPackage>,
}

#[derive(Debug, Deserialize)]
struct CatalogPackage {
    #[serde(default)]
    resources: Option<Vec<RawResource>>,
}

impl<T: HttpTransport> VotingClient<T> {
    /// Fetches the list of available votes.
    ///
    /// Descriptors keep the order of the source `resources` array. Missing
    /// fields are replaced by the sentinels in [`crate::core::resource`].
    pub fn fetch_catalog(&self) -> OperationResult<Vec<ResourceDescriptor>> {
        let result = self.try_fetch_catalog();
        if let Err(ref e) = result {
            warn!(kind = %e.kind(), error = %e, "catalog fetch failed");
        }
        result.into()
    }

    /// [`fetch_catalog`](Self::fetch_catalog) as a plain `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`], [`FetchError::Decode`], or
    /// [`FetchError::Schema`].
    pub fn try_fetch_catalog(&self) -> Result<Vec<ResourceDescriptor>, FetchError> {
        let body = self.transport.get_text(
            &self.config.catalog_url,
            &[("id", self.config.dataset_id.as_str())],
        )?;
        let descriptors = parse_catalog(&body)?;
        debug!(count = descriptors.len(), "catalog parsed");
        Ok(descriptors)
    }
}

/// Parses a catalog response body.
pub(crate) fn parse_catalog(body: &str) -> Result<Vec<ResourceDescriptor>, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    let envelope: CatalogEnvelope = serde_json::from_value(value)
        .map_err(|e| FetchError::Schema(format!("unexpected catalog response shape: {e}")))?;

    if envelope.success != Some(true) {
        return Err(FetchError::Schema(CATALOG_NOT_SUCCESSFUL.to_string()));
    }

    let resources = envelope
        .result
        .and_then(|r| r.resources)
        .ok_or_else(|| {
            FetchError::Schema("catalog response is missing result.resources".to_string())
        })?;

    Ok(resources.into_iter().map(ResourceDescriptor::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{ScriptedTransport, catalog_body, test_client};
    use crate::core::{NO_DATE, NO_DESCRIPTION, NO_URL, UNKNOWN_FORMAT, UNKNOWN_MODIFIED};
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_well_formed_catalog() {
        let body = catalog_body(&[
            json!({"coverage": "2021-06-13", "description": {"en": "CO2 Act"},
                   "download_url": "https://example.org/a.json", "format": "JSON",
                   "last_modified": "2021-06-14"}),
            json!({"coverage": "2020-09-27", "description": {"en": "Hunting Act"}}),
            json!({}),
        ]);
        let client = test_client(ScriptedTransport::new().with_catalog(&body));

        let result = client.fetch_catalog();
        assert!(result.success);
        assert!(result.error.is_none());
        let list = result.payload.unwrap_or_default();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].description_en, "CO2 Act");
        assert_eq!(list[1].description_en, "Hunting Act");
        assert_eq!(list[1].download_url, NO_URL);
        assert_eq!(list[2].coverage_date, NO_DATE);
        assert_eq!(list[2].description_en, NO_DESCRIPTION);
        assert_eq!(list[2].format, UNKNOWN_FORMAT);
        assert_eq!(list[2].last_modified, UNKNOWN_MODIFIED);
    }

    #[test]
    fn test_order_is_stable() {
        let body = catalog_body(&[
            json!({"description": {"en": "zeta"}}),
            json!({"description": {"en": "alpha"}}),
            json!({"description": {"en": "mu"}}),
        ]);
        let client = test_client(ScriptedTransport::new().with_catalog(&body));

        let first = client.fetch_catalog().payload.unwrap_or_default();
        let second = client.fetch_catalog().payload.unwrap_or_default();
        let names: Vec<&str> = first.iter().map(|d| d.description_en.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mu"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_resources() {
        let client = test_client(ScriptedTransport::new().with_catalog(&catalog_body(&[])));
        let result = client.fetch_catalog();
        assert!(result.success);
        assert_eq!(result.payload.map(|p| p.len()), Some(0));
    }

    #[test]
    fn test_success_false() {
        let body = json!({"success": false, "error": {"message": "Not found"}}).to_string();
        let client = test_client(ScriptedTransport::new().with_catalog(&body));

        let result = client.fetch_catalog();
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some(CATALOG_NOT_SUCCESSFUL));
        assert_eq!(result.error_kind, Some(ErrorKind::Schema));
        assert!(result.payload.is_none());
    }

    #[test]
    fn test_success_absent() {
        let body = json!({"result": {"resources": []}}).to_string();
        let client = test_client(ScriptedTransport::new().with_catalog(&body));

        let result = client.fetch_catalog();
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some(CATALOG_NOT_SUCCESSFUL));
    }

    #[test]
    fn test_missing_resources_is_schema_error() {
        let body = json!({"success": true, "result": {}}).to_string();
        let client = test_client(ScriptedTransport::new().with_catalog(&body));

        let result = client.fetch_catalog();
        assert_eq!(result.error_kind, Some(ErrorKind::Schema));
    }

    #[test]
    fn test_unparsable_json_is_decode_error() {
        let client = test_client(ScriptedTransport::new().with_catalog("<html>502</html>"));

        let result = client.fetch_catalog();
        assert!(!result.success);
        assert_eq!(result.error_kind, Some(ErrorKind::Decode));
        assert!(
            result
                .error
                .unwrap_or_default()
                .starts_with("Error parsing JSON response: ")
        );
    }

    #[test]
    fn test_transport_failure() {
        let client = test_client(
            ScriptedTransport::new().with_catalog_failure("503 Service Unavailable"),
        );

        let result = client.fetch_catalog();
        assert!(!result.success);
        assert_eq!(result.error_kind, Some(ErrorKind::Transport));
        assert!(
            result
                .error
                .unwrap_or_default()
                .contains("503 Service Unavailable")
        );
    }

    #[test]
    fn test_sends_dataset_id() {
        let transport = ScriptedTransport::new().with_catalog(&catalog_body(&[]));
        let client = test_client(transport);
        let _ = client.fetch_catalog();

        let requests = client.transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, client.config.catalog_url);
        assert_eq!(
            requests[0].1,
            vec![("id".to_string(), client.config.dataset_id.clone())]
        );
    }
}
