//! Input/output types for the analysis engine (JSON contract with callers).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input: one JSON object from the caller.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
  pub notes: String,
  /// Defaults to the local date at invocation when omitted.
  #[serde(default)]
  pub reference_date: Option<NaiveDate>,
}

/// Building discipline responsible for remedying a defect.
///
/// Classification order comes from the keyword table, not this enum;
/// `Other` means no keyword from any trade list matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trade {
  Plumbing,
  Electrical,
  Joinery,
  Decoration,
  Groundworks,
  Roofing,
  Other,
}

impl Trade {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Plumbing => "Plumbing",
      Self::Electrical => "Electrical",
      Self::Joinery => "Joinery",
      Self::Decoration => "Decoration",
      Self::Groundworks => "Groundworks",
      Self::Roofing => "Roofing",
      Self::Other => "Other",
    }
  }
}

/// Urgency tier driving the remediation due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
  High,
  Medium,
  Low,
}

impl Priority {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.to_ascii_lowercase().as_str() {
      "high" => Some(Self::High),
      "medium" => Some(Self::Medium),
      "low" => Some(Self::Low),
      _ => None,
    }
  }

  /// Working days allowed before the remediation due date.
  pub fn working_days(self) -> u32 {
    match self {
      Self::High => 3,
      Self::Medium => 7,
      Self::Low => 14,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::High => "High",
      Self::Medium => "Medium",
      Self::Low => "Low",
    }
  }
}

/// Output: the fully-populated analysis for one snag. Never partial — every
/// field is assigned on every call, whatever the notes contain.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
  pub summary: String,
  pub trade: Trade,
  pub priority: Priority,
  /// Zero-padded YYYY-MM-DD, always a weekday strictly after the reference date.
  pub due_date: String,
  /// Single lowercase token; falls back to "general", never empty.
  pub defect_type: String,
  /// Heuristic match strength in [20, 100].
  pub confidence: u8,
}

/// Structured error output for invalid input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}
