//! Text normalization and whole-word keyword matching.

/// Lowercase + trim. Punctuation, accents, and internal whitespace are
/// preserved; downstream matching is whole-word based.
pub fn normalize(text: &str) -> String {
  text.trim().to_lowercase()
}

fn is_word_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_'
}

/// Whole-word match: the needle must appear as a complete word, not flanked
/// by word characters on either side. "scuff" does not match inside
/// "scuffed". Both sides are expected pre-lowercased.
pub fn contains_whole_word(haystack: &str, needle: &str) -> bool {
  if needle.is_empty() {
    return false;
  }
  let mut start = 0;
  while let Some(offset) = haystack[start..].find(needle) {
    let begin = start + offset;
    let end = begin + needle.len();
    let clear_before = haystack[..begin]
      .chars()
      .next_back()
      .map_or(true, |c| !is_word_char(c));
    let clear_after = haystack[end..]
      .chars()
      .next()
      .map_or(true, |c| !is_word_char(c));
    if clear_before && clear_after {
      return true;
    }
    // Advance past the first char of this hit and keep scanning.
    let step = haystack[begin..].chars().next().map_or(1, char::len_utf8);
    start = begin + step;
  }
  false
}
