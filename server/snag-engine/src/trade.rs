//! Trade classification from the ordered keyword table.

use crate::keywords::TRADE_KEYWORDS;
use crate::normalize::contains_whole_word;
use crate::types::Trade;

/// Outcome of trade classification over normalized notes.
#[derive(Debug, Clone)]
pub struct TradeMatch {
  pub trade: Trade,
  /// First matching keyword of the winning trade; None when trade is Other.
  pub keyword: Option<&'static str>,
  /// Matches within the winning trade's own list.
  #[allow(dead_code)] // not consumed by the confidence formula; total_matches is
  pub winner_matches: usize,
  /// Matches tallied across every trade list, winner or not. Feeds the
  /// confidence score.
  pub total_matches: usize,
}

/// First trade in table order with at least one whole-word match wins; its
/// first matching keyword (keyword-list order) is recorded.
pub fn classify(notes: &str) -> TradeMatch {
  let mut result = TradeMatch {
    trade: Trade::Other,
    keyword: None,
    winner_matches: 0,
    total_matches: 0,
  };

  for (trade, keywords) in TRADE_KEYWORDS {
    let matches: Vec<&'static str> = keywords
      .iter()
      .copied()
      .filter(|keyword| contains_whole_word(notes, keyword))
      .collect();
    result.total_matches += matches.len();
    if result.trade == Trade::Other && !matches.is_empty() {
      result.trade = *trade;
      result.keyword = Some(matches[0]);
      result.winner_matches = matches.len();
    }
  }

  result
}
