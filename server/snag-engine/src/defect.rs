//! Defect keyword selection with a fixed fallback chain.

use crate::priority::PriorityMatch;

/// Pick one lowercase token to represent the defect: the winning trade
/// keyword, else the first matched priority cue, else the first alphabetic
/// run in the notes, else "general".
pub fn extract(
  notes: &str,
  trade_keyword: Option<&'static str>,
  priority: &PriorityMatch,
) -> String {
  if let Some(keyword) = trade_keyword {
    return keyword.to_string();
  }

  if let Some(keyword) = priority.keywords.first() {
    return keyword.to_string();
  }

  match first_alphabetic_run(notes) {
    Some(run) => run,
    None => "general".to_string(),
  }
}

/// First contiguous run of ASCII letters, if any. Notes arrive lowercased.
fn first_alphabetic_run(text: &str) -> Option<String> {
  let start = text.find(|c: char| c.is_ascii_alphabetic())?;
  let run: String = text[start..]
    .chars()
    .take_while(|c| c.is_ascii_alphabetic())
    .collect();
  Some(run)
}
