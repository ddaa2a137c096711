//! Search-term extraction from free-text proposal names.
//!
//! Proposal names arrive either in the long ballot form
//! `Federal proposals: 1. Popular Initiative 'Title'` or as a bare title.
//! The quoted part wins when present.

use crate::error::FetchError;

/// Ballot-list prefix stripped from unquoted names (lower-case match).
pub const BALLOT_PREFIX: &str = "federal proposals:";

/// Extracts the lower-cased search term from a proposal name.
///
/// - With quotes: the text between the first and second `'`. A name with
///   a single `'` is rejected.
/// - Without quotes: the whole name with every `federal proposals:`
///   removed.
///
/// The result is trimmed and must not be empty.
///
/// # Errors
///
/// Returns [`FetchError::InvalidInput`] for a lone quote or an empty term.
pub fn extract_search_term(proposal_name: &str) -> Result<String, FetchError> {
    let term = if proposal_name.contains('\'') {
        let mut parts = proposal_name.split('\'');
        let quoted = parts.nth(1).unwrap_or_default();
        if parts.next().is_none() {
            return Err(FetchError::InvalidInput(format!(
                "unbalanced quote in proposal name: {proposal_name}"
            )));
        }
        quoted.to_lowercase().trim().to_string()
    } else {
        proposal_name
            .to_lowercase()
            .replace(BALLOT_PREFIX, "")
            .trim()
            .to_string()
    };

    if term.is_empty() {
        return Err(FetchError::InvalidInput(format!(
            "no search term in proposal name: {proposal_name:?}"
        )));
    }
    Ok(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("Federal proposals: 1. Popular Initiative 'Example Title'", "example title" ; "ballot form")]
    #[test_case("Example Title", "example title" ; "bare title")]
    #[test_case("  Federal proposals: Example Title  ", "example title" ; "unquoted with prefix")]
    #[test_case("Initiative ' Spaced Out ' tail", "spaced out" ; "quoted term is trimmed")]
    #[test_case("'For a responsible economy within our planet's limits'", "for a responsible economy within our planet" ; "first pair of quotes only")]
    #[test_case("CO2 ACT", "co2 act" ; "upper case")]
    fn test_extract(input: &str, expected: &str) {
        assert_eq!(extract_search_term(input).ok().as_deref(), Some(expected));
    }

    #[test_case("Popular Initiative 'Unclosed" ; "single quote")]
    #[test_case("''" ; "empty quotes")]
    #[test_case("Federal proposals:" ; "prefix only")]
    #[test_case("   " ; "blank")]
    fn test_invalid(input: &str) {
        assert!(matches!(
            extract_search_term(input),
            Err(FetchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_prefix_removed_everywhere() {
        let term = extract_search_term("federal proposals: a federal proposals: b");
        assert_eq!(term.ok().as_deref(), Some("a  b"));
    }

    proptest! {
        #[test]
        fn prop_term_is_lowercase_and_trimmed(name in "[A-Za-z ]{1,40}") {
            if let Ok(term) = extract_search_term(&name) {
                prop_assert_eq!(term.clone(), term.to_lowercase());
                prop_assert_eq!(term.trim(), term.as_str());
                prop_assert!(!term.is_empty());
            }
        }

        #[test]
        fn prop_quoted_term_found_in_name(inner in "[a-z]{1,20}", prefix in "[A-Za-z ]{0,20}") {
            let name = format!("{prefix}'{inner}'");
            prop_assert_eq!(extract_search_term(&name).ok(), Some(inner));
        }
    }
}
