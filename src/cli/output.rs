//! Output formatting for CLI commands.
//!
//! Text output follows the layout of a printed ballot report; JSON output
//! is the operation envelope itself.

use std::fmt::Write as FmtWrite;

use serde::Serialize;

use crate::core::{OperationResult, ResourceDescriptor, VoteSummary};
use crate::tools::ToolDefinition;

/// Width of the separator rule in text output.
const RULE_WIDTH: usize = 50;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parses a format name (case-insensitive). Unknown names fall back to text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Serializes `value` as pretty JSON followed by a newline.
    #[must_use]
    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> String {
        let mut out = serde_json::to_string_pretty(value)
            .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {e}\"}}"));
        out.push('\n');
        out
    }
}

fn rule(output: &mut String) {
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');
}

/// Formats a catalog listing.
#[must_use]
pub fn format_catalog(descriptors: &[ResourceDescriptor], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if descriptors.is_empty() {
                return "No voting data available.\n".to_string();
            }
            let mut output = String::from("Available voting data:\n");
            rule(&mut output);
            for d in descriptors {
                let _ = writeln!(output, "Date: {}", d.coverage_date);
                let _ = writeln!(output, "Description: {}", d.description_en);
                let _ = writeln!(output, "Download URL: {}", d.download_url);
                let _ = writeln!(output, "Format: {}", d.format);
                let _ = writeln!(output, "Last Modified: {}", d.last_modified);
                rule(&mut output);
            }
            output
        }
        OutputFormat::Json => format.to_json(&OperationResult::ok(descriptors)),
    }
}

/// Formats a vote summary.
#[must_use]
pub fn format_summary(summary: &VoteSummary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::from("Voting Summary:\n");
            rule(&mut output);
            let _ = writeln!(output, "Title (English): {}", summary.title);
            let date = summary
                .formatted_date()
                .unwrap_or_else(|| summary.date.clone());
            let _ = writeln!(output, "Date: {date}");
            let _ = writeln!(output, "Result: {}", summary.outcome_label());
            let _ = writeln!(output, "Turnout: {:.1}%", summary.turnout_pct);
            let _ = writeln!(output, "Yes Percentage: {:.1}%", summary.yes_pct);
            let _ = writeln!(output, "Yes Votes: {}", group_thousands(summary.yes_votes));
            let _ = writeln!(output, "No Votes: {}", group_thousands(summary.no_votes));
            let _ = writeln!(
                output,
                "Eligible Voters: {}",
                group_thousands(summary.eligible_voters)
            );

            output.push_str("\nTitles in all languages:\n");
            for (lang, title) in &summary.titles_by_lang {
                let _ = writeln!(output, "{}: {title}", lang.to_uppercase());
            }
            output
        }
        OutputFormat::Json => format.to_json(&OperationResult::ok(summary)),
    }
}

/// Formats an extracted search term.
#[must_use]
pub fn format_term(proposal: &str, term: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{term}\n"),
        OutputFormat::Json => format.to_json(&serde_json::json!({
            "proposal": proposal,
            "search_term": term,
        })),
    }
}

/// Formats tool definitions.
#[must_use]
pub fn format_tools(definitions: &[ToolDefinition], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for def in definitions {
                let _ = writeln!(output, "{}", def.name);
                let _ = writeln!(output, "  {}", def.description);
            }
            output
        }
        OutputFormat::Json => format.to_json(definitions),
    }
}

/// Renders a count with `,` thousands separators.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
