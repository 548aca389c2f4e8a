//! Fixed-length note summaries.

const WORD_LIMIT: usize = 30;

/// First 30 whitespace-delimited words joined by single spaces, with a
/// trailing "..." (no added space) when the notes run longer. Zero words
/// give an empty string, not the marker alone.
pub fn summarise(notes: &str) -> String {
  let words: Vec<&str> = notes.split_whitespace().collect();
  if words.is_empty() {
    return String::new();
  }

  let summary = words[..words.len().min(WORD_LIMIT)].join(" ");
  if words.len() > WORD_LIMIT {
    format!("{}...", summary)
  } else {
    summary
  }
}
