//! Vote summary extracted from a detail payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Used when a proposal has neither an English nor a German title.
pub const NO_TITLE: &str = "Title not available";

/// Normalized national result of one federal proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteSummary {
    /// English title, falling back to German, then [`NO_TITLE`].
    pub title: String,
    /// Vote date as `YYYYMMDD`, verbatim from the source.
    pub date: String,
    /// Whether the proposal was accepted.
    pub accepted: bool,
    /// Voter turnout in percent.
    pub turnout_pct: f64,
    /// Share of yes votes in percent.
    pub yes_pct: f64,
    /// Absolute yes votes.
    pub yes_votes: u64,
    /// Absolute no votes.
    pub no_votes: u64,
    /// Number of eligible voters.
    pub eligible_voters: u64,
    /// Title per language code, every language present in the source.
    pub titles_by_lang: BTreeMap<String, String>,
}

impl VoteSummary {
    /// Builds a summary from the vote date and the first proposal record.
    pub(crate) fn from_record(date: String, record: ProposalRecord) -> Self {
        let titles_by_lang: BTreeMap<String, String> = record
            .titles
            .into_iter()
            .map(|t| (t.lang_key, t.text))
            .collect();
        let title = preferred_title(&titles_by_lang);
        let result = record.result;

        Self {
            title,
            date,
            accepted: record.accepted,
            turnout_pct: result.turnout_pct,
            yes_pct: result.yes_pct,
            yes_votes: result.yes_votes,
            no_votes: result.no_votes,
            eligible_voters: result.eligible_voters,
            titles_by_lang,
        }
    }

    /// Returns the date as `YYYY-MM-DD` if it is eight ASCII digits.
    #[must_use]
    pub fn formatted_date(&self) -> Option<String> {
        let d = &self.date;
        if d.len() == 8 && d.bytes().all(|b| b.is_ascii_digit()) {
            Some(format!("{}-{}-{}", &d[..4], &d[4..6], &d[6..]))
        } else {
            None
        }
    }

    /// Returns `"Accepted"` or `"Rejected"`.
    #[must_use]
    pub const fn outcome_label(&self) -> &'static str {
        if self.accepted { "Accepted" } else { "Rejected" }
    }
}

/// Picks `en`, then `de`, then [`NO_TITLE`].
fn preferred_title(titles: &BTreeMap<String, String>) -> String {
    titles
        .get("en")
        .or_else(|| titles.get("de"))
        .map_or_else(|| NO_TITLE.to_string(), Clone::clone)
}

/// One entry of `schweiz.vorlagen`. All fields are required.
#[derive(Debug, Deserialize)]
pub(crate) struct ProposalRecord {
    #[serde(rename = "vorlagenTitel")]
    titles: Vec<ProposalTitle>,
    #[serde(rename = "vorlageAngenommen")]
    accepted: bool,
    #[serde(rename = "resultat")]
    result: NationalResult,
}

impl ProposalRecord {
    /// Returns `true` if at least one title is present.
    pub(crate) fn has_titles(&self) -> bool {
        !self.titles.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct ProposalTitle {
    #[serde(rename = "langKey")]
    lang_key: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct NationalResult {
    #[serde(rename = "stimmbeteiligungInProzent")]
    turnout_pct: f64,
    #[serde(rename = "jaStimmenInProzent")]
    yes_pct: f64,
    #[serde(rename = "jaStimmenAbsolut")]
    yes_votes: u64,
    #[serde(rename = "neinStimmenAbsolut")]
    no_votes: u64,
    #[serde(rename = "anzahlStimmberechtigte")]
    eligible_voters: u64,
}
