//! Scripted transport shared by the client and tool tests.

use std::collections::HashMap;
use std::sync::Mutex;

use super::config::{ClientConfig, DEFAULT_CATALOG_URL};
use super::transport::HttpTransport;
use super::voting::VotingClient;
use crate::error::FetchError;

type Request = (String, Vec<(String, String)>);

/// Replays canned bodies or transport failures keyed by URL.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: HashMap<String, Result<String, FetchError>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(self, body: &str) -> Self {
        self.with_response(DEFAULT_CATALOG_URL, body)
    }

    pub fn with_catalog_failure(self, message: &str) -> Self {
        self.with_failure(DEFAULT_CATALOG_URL, message)
    }

    pub fn with_response(mut self, url: &str, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_failure(mut self, url: &str, message: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            Err(FetchError::Transport(message.to_string())),
        );
        self
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl HttpTransport for ScriptedTransport {
    fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, FetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((
                url.to_string(),
                query
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                    .collect(),
            ));
        }
        self.responses.get(url).cloned().unwrap_or_else(|| {
            Err(FetchError::Transport(format!(
                "HTTP status client error (404 Not Found) for url ({url})"
            )))
        })
    }
}

pub fn test_client(transport: ScriptedTransport) -> VotingClient<ScriptedTransport> {
    VotingClient::with_transport(transport, ClientConfig::default())
}

/// Builds a successful CKAN `package_show` body around `resources`.
pub fn catalog_body(resources: &[serde_json::Value]) -> String {
    serde_json::json!({
        "help": "https://ckan.opendata.swiss/api/3/action/help_show?name=package_show",
        "success": true,
        "result": { "resources": resources }
    })
    .to_string()
}

/// Builds a detail payload with one proposal.
pub fn detail_body(titles: &[(&str, &str)], accepted: bool) -> String {
    let titles: Vec<serde_json::Value> = titles
        .iter()
        .map(|(lang, text)| serde_json::json!({"langKey": lang, "text": text}))
        .collect();
    serde_json::json!({
        "abstimmtag": "20210613",
        "schweiz": {
            "vorlagen": [{
                "vorlagenId": 6440,
                "vorlagenTitel": titles,
                "vorlageAngenommen": accepted,
                "resultat": {
                    "stimmbeteiligungInProzent": 59.6,
                    "jaStimmenInProzent": 48.4,
                    "jaStimmenAbsolut": 1_594_919,
                    "neinStimmenAbsolut": 1_699_637,
                    "anzahlStimmberechtigte": 5_531_223
                }
            }]
        }
    })
    .to_string()
}
