//! Priority classification: High cues first, then Low, Medium as the default.

use crate::keywords::{HIGH_KEYWORDS, LOW_KEYWORDS};
use crate::normalize::contains_whole_word;
use crate::types::Priority;

/// Outcome of priority classification over normalized notes.
#[derive(Debug, Clone)]
pub struct PriorityMatch {
  pub priority: Priority,
  /// Every cue that matched from the winning list, in list order. Empty for
  /// Medium, which has no list of its own.
  pub keywords: Vec<&'static str>,
}

pub fn classify(notes: &str) -> PriorityMatch {
  let high = matched(notes, HIGH_KEYWORDS);
  if !high.is_empty() {
    return PriorityMatch {
      priority: Priority::High,
      keywords: high,
    };
  }

  let low = matched(notes, LOW_KEYWORDS);
  if !low.is_empty() {
    return PriorityMatch {
      priority: Priority::Low,
      keywords: low,
    };
  }

  PriorityMatch {
    priority: Priority::Medium,
    keywords: Vec::new(),
  }
}

fn matched(notes: &str, keywords: &[&'static str]) -> Vec<&'static str> {
  keywords
    .iter()
    .copied()
    .filter(|keyword| contains_whole_word(notes, keyword))
    .collect()
}
