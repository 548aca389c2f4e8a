//! Snag Tracker Analysis Engine — rule-based (V1); no AI, no DB, no network.
//!
//! Derives triage metadata from free-text snag notes: responsible trade,
//! urgency, a working-day due date, a defect keyword, a condensed summary,
//! and a confidence score. Used by the register CLI as a library; the binary
//! wraps it for stdin/stdout JSON.

mod confidence;
mod defect;
mod due_date;
mod keywords;
mod normalize;
mod priority;
mod summary;
mod trade;
mod types;

pub use types::{AnalysisResult, ErrorOutput, Input, Priority, Trade};

use chrono::NaiveDate;

/// Analyse snag notes against a reference date.
///
/// Pure function of its two arguments: identical inputs always produce an
/// identical result, the notes are never mutated, and every field of the
/// result is populated no matter how sparse the text is.
pub fn analyse(notes: &str, reference_date: NaiveDate) -> AnalysisResult {
  let normalized = normalize::normalize(notes);
  let trade_match = trade::classify(&normalized);
  let priority_match = priority::classify(&normalized);
  let due = due_date::add_working_days(
    reference_date,
    priority_match.priority.working_days(),
  );

  AnalysisResult {
    summary: summary::summarise(notes.trim()),
    trade: trade_match.trade,
    priority: priority_match.priority,
    due_date: due_date::format_iso_date(due),
    defect_type: defect::extract(&normalized, trade_match.keyword, &priority_match),
    confidence: confidence::score(
      trade_match.trade,
      trade_match.total_matches,
      priority_match.keywords.len(),
    ),
  }
}
