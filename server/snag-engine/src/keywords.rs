//! Static keyword tables. Read-only configuration: built once, never mutated,
//! safe for concurrent reads.
//!
//! Order is part of the contract. Lists can overlap in subject matter
//! ("paint" is both a Decoration cue and a Low-urgency cue), so trade
//! classification walks the table in declaration order and takes the first
//! trade with a match, and High cues are always tested before Low cues.

use crate::types::Trade;

/// Ordered (trade, keyword list) table for trade classification.
pub const TRADE_KEYWORDS: &[(Trade, &[&str])] = &[
  (Trade::Plumbing, &["leak", "tap", "pipe", "trap", "water", "boiler"]),
  (Trade::Electrical, &["socket", "light", "switch", "pendant", "fuse"]),
  (Trade::Joinery, &["door", "hinge", "cupboard", "frame", "unit"]),
  (Trade::Decoration, &["paint", "mark", "chip", "scuff", "cosmetic"]),
  (Trade::Groundworks, &["drain", "gutter", "path", "garden"]),
  (Trade::Roofing, &["roof", "tile", "flashing"]),
];

/// High-urgency cues. Any match forces High, regardless of Low cues.
pub const HIGH_KEYWORDS: &[&str] = &["leak", "water", "live", "gas", "urgent", "move", "handover"];

/// Low-urgency cues. Only consulted when no High cue matched.
pub const LOW_KEYWORDS: &[&str] = &[
  "cosmetic",
  "paint",
  "scuff",
  "alignment",
  "centred",
  "centered",
];
