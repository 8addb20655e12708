//! Text and JSON output for the `pokerhand` binary.

use clap::ValueEnum;
use serde::Serialize;

use pokerhand_core::poker::{HandCategory, PokerHand};
use pokerhand_core::showdown::Verdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable lines
    Text,
    /// JSON documents (one per line for `judge`)
    Json,
}

/// One named hand and its category.
#[derive(Debug, Clone, Serialize)]
pub struct HandReport {
    pub name: String,
    pub cards: String,
    pub category: HandCategory,
}

impl HandReport {
    pub fn new(name: &str, hand: &PokerHand) -> Self {
        Self {
            name: name.to_string(),
            cards: hand.to_string(),
            category: hand.category(),
        }
    }
}

impl std::fmt::Display for HandReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.name, self.cards, self.category)
    }
}

/// Both hands plus the verdict and its sentence.
#[derive(Debug, Clone, Serialize)]
pub struct ShowdownReport {
    pub first: HandReport,
    pub second: HandReport,
    pub verdict: Verdict,
    pub summary: String,
}

impl ShowdownReport {
    pub fn new(first: (&str, &PokerHand), second: (&str, &PokerHand)) -> Self {
        let verdict = pokerhand_core::showdown::showdown(first.1, second.1);
        Self {
            first: HandReport::new(first.0, first.1),
            second: HandReport::new(second.0, second.1),
            summary: verdict.describe(first.0, second.0),
            verdict,
        }
    }
}

/// Full report: both hands, then the verdict.
pub fn showdown(format: Format, report: &ShowdownReport) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(format!(
            "{}\n{}\n{}",
            report.first, report.second, report.summary
        )),
        Format::Json => serde_json::to_string_pretty(report),
    }
}

/// One judged game line: just the sentence, or a compact JSON object.
pub fn judged(format: Format, report: &ShowdownReport) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(report.summary.clone()),
        Format::Json => serde_json::to_string(report),
    }
}

pub fn category(format: Format, report: &HandReport) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(format!("{}: {}", report.cards, report.category)),
        Format::Json => serde_json::to_string_pretty(report),
    }
}
