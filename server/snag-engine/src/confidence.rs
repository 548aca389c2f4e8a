//! Heuristic confidence score: how strongly the text matched known patterns.

use crate::types::Trade;

/// Additive score, not a probability: base 25, +25 for a recognized trade,
/// +10 per trade match and per priority cue (each capped at 3), clamped to
/// [20, 100]. Saturates rather than overflowing; the floor of 20 stands for
/// the default confidence that exists even with zero signals.
pub fn score(trade: Trade, total_trade_matches: usize, priority_matches: usize) -> u8 {
  let mut score: i32 = 25;

  if trade != Trade::Other {
    score += 25;
  }

  score += (total_trade_matches.min(3) * 10) as i32;
  score += (priority_matches.min(3) * 10) as i32;

  score.min(100).max(20) as u8
}
