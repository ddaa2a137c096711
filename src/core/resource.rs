//! Catalog resource descriptors.
//!
//! A descriptor is one entry of the opendata.swiss dataset: a single
//! federal vote with a link to its detailed result payload. Missing
//! source fields are replaced by the named sentinels below, never left
//! empty.

use serde::{Deserialize, Serialize};

/// Substituted when a resource has no `coverage` date.
pub const NO_DATE: &str = "No date available";
/// Substituted when a resource has no English description.
pub const NO_DESCRIPTION: &str = "No description available";
/// Substituted when a resource has no `download_url`.
pub const NO_URL: &str = "No URL available";
/// Substituted when a resource has no `format`.
pub const UNKNOWN_FORMAT: &str = "Unknown format";
/// Substituted when a resource has no `last_modified` timestamp.
pub const UNKNOWN_MODIFIED: &str = "Unknown";

/// One downloadable vote in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Coverage date (ISO-like) or [`NO_DATE`].
    pub coverage_date: String,
    /// English description or [`NO_DESCRIPTION`].
    pub description_en: String,
    /// Detail payload URL or [`NO_URL`].
    pub download_url: String,
    /// Data format (usually `JSON`) or [`UNKNOWN_FORMAT`].
    pub format: String,
    /// Last modification timestamp or [`UNKNOWN_MODIFIED`].
    pub last_modified: String,
}

impl ResourceDescriptor {
    /// Returns `true` if the resource carries a real English description.
    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description_en != NO_DESCRIPTION
    }

    /// Returns `true` if the resource carries a real download URL.
    #[must_use]
    pub fn has_download_url(&self) -> bool {
        self.download_url != NO_URL
    }

    /// Returns `true` if the lower-cased description contains `term`.
    ///
    /// `term` is expected to be lower-case already. A resource without a
    /// description never matches.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        self.has_description() && self.description_en.to_lowercase().contains(term)
    }
}

/// A resource entry as it appears under `result.resources`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawResource {
    #[serde(default)]
    coverage: Option<String>,
    #[serde(default)]
    description: Option<LocalizedText>,
    #[serde(default)]
    download_url: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    last_modified: Option<String>,
}

/// Multilingual CKAN text field; only English is read.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocalizedText {
    #[serde(default)]
    en: Option<String>,
}

impl From<RawResource> for ResourceDescriptor {
    fn from(raw: RawResource) -> Self {
        Self {
            coverage_date: raw.coverage.unwrap_or_else(|| NO_DATE.to_string()),
            description_en: raw
                .description
                .and_then(|d| d.en)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            download_url: raw.download_url.unwrap_or_else(|| NO_URL.to_string()),
            format: raw.format.unwrap_or_else(|| UNKNOWN_FORMAT.to_string()),
            last_modified: raw
                .last_modified
                .unwrap_or_else(|| UNKNOWN_MODIFIED.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(json: &str) -> ResourceDescriptor {
        let raw: RawResource = serde_json::from_str(json).unwrap_or_default();
        ResourceDescriptor::from(raw)
    }

    #[test]
    fn test_all_fields_present() {
        let d = descriptor(
            r#"{
                "coverage": "2021-06-13",
                "description": {"en": "Federal proposals: 1. CO2 Act", "de": "CO2-Gesetz"},
                "download_url": "https://example.org/sd-t-17-02-20210613-eidgAbstimmung.json",
                "format": "JSON",
                "last_modified": "2021-06-14T08:00:00"
            }"#,
        );
        assert_eq!(d.coverage_date, "2021-06-13");
        assert_eq!(d.description_en, "Federal proposals: 1. CO2 Act");
        assert_eq!(d.format, "JSON");
        assert_eq!(d.last_modified, "2021-06-14T08:00:00");
        assert!(d.has_description());
        assert!(d.has_download_url());
    }

    #[test]
    fn test_missing_coverage() {
        assert_eq!(descriptor("{}").coverage_date, NO_DATE);
    }

    #[test]
    fn test_missing_description() {
        let d = descriptor("{}");
        assert_eq!(d.description_en, NO_DESCRIPTION);
        assert!(!d.has_description());
    }

    #[test]
    fn test_description_without_english() {
        let d = descriptor(r#"{"description": {"de": "Nur Deutsch"}}"#);
        assert_eq!(d.description_en, NO_DESCRIPTION);
    }

    #[test]
    fn test_missing_download_url() {
        let d = descriptor("{}");
        assert_eq!(d.download_url, NO_URL);
        assert!(!d.has_download_url());
    }

    #[test]
    fn test_missing_format_and_modified() {
        let d = descriptor("{}");
        assert_eq!(d.format, UNKNOWN_FORMAT);
        assert_eq!(d.last_modified, UNKNOWN_MODIFIED);
    }

    #[test]
    fn test_null_fields_use_sentinels() {
        let d = descriptor(r#"{"coverage": null, "format": null, "description": null}"#);
        assert_eq!(d.coverage_date, NO_DATE);
        assert_eq!(d.format, UNKNOWN_FORMAT);
        assert_eq!(d.description_en, NO_DESCRIPTION);
    }

    #[test]
    fn test_matches_is_case_insensitive_on_description() {
        let d = descriptor(r#"{"description": {"en": "Popular Initiative 'For Clean Water'"}}"#);
        assert!(d.matches("for clean water"));
        assert!(!d.matches("pesticides"));
    }

    #[test]
    fn test_sentinel_description_never_matches() {
        let d = descriptor("{}");
        assert!(!d.matches("description"));
    }
}
