//! Integration tests for the snag analysis engine.

use chrono::NaiveDate;
use snag_engine::{analyse, Priority, Trade};

/// 2025-01-13, a Monday.
fn monday() -> NaiveDate {
  NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
}

#[test]
fn external_tap_scenario() {
  let result = analyse(
    "External tap not live. Suspect isolation valve left off.",
    monday(),
  );

  assert_eq!(result.trade, Trade::Plumbing, "matched via 'tap'");
  assert_eq!(result.priority, Priority::High, "matched via 'live'");
  // Three working days from Monday is Thursday of the same week.
  assert_eq!(result.due_date, "2025-01-16");
  assert_eq!(result.defect_type, "tap");
}

#[test]
fn landing_pendant_scenario() {
  let result = analyse("Landing pendant not centred. Cosmetic only.", monday());

  // Electrical precedes Decoration in table order, so "pendant" beats the
  // also-matching "cosmetic".
  assert_eq!(result.trade, Trade::Electrical);
  assert_eq!(result.priority, Priority::Low);
  assert_eq!(result.due_date, "2025-01-31");
  assert_eq!(result.defect_type, "pendant");
  // 25 base + 25 trade + 2 trade matches + 2 priority cues.
  assert_eq!(result.confidence, 90);
}

#[test]
fn empty_notes_still_yield_a_complete_result() {
  let result = analyse("", monday());

  assert_eq!(result.trade, Trade::Other);
  assert_eq!(result.priority, Priority::Medium);
  assert_eq!(result.defect_type, "general");
  assert_eq!(result.confidence, 25);
  assert_eq!(result.summary, "");
  // Medium still gets a due date: seven working days out.
  assert_eq!(result.due_date, "2025-01-22");
}

#[test]
fn whitespace_only_notes_behave_like_empty() {
  let result = analyse("  \n\t  ", monday());
  assert_eq!(result.trade, Trade::Other);
  assert_eq!(result.priority, Priority::Medium);
  assert_eq!(result.defect_type, "general");
  assert_eq!(result.summary, "");
}

#[test]
fn unrecognized_45_word_notes() {
  let words: Vec<String> = (0..45).map(|i| format!("item{:02}", i)).collect();
  let notes = words.join(" ");
  let result = analyse(&notes, monday());

  assert_eq!(result.trade, Trade::Other);
  assert_eq!(result.priority, Priority::Medium);
  assert_eq!(result.confidence, 25, "no trade or priority bonuses apply");
  assert_eq!(result.defect_type, "item", "first alphabetic run in the notes");

  let expected = format!("{}...", words[..30].join(" "));
  assert_eq!(result.summary, expected);
}

#[test]
fn exactly_31_tokens_truncates_without_a_space() {
  let words: Vec<String> = (1..=31).map(|i| format!("w{}", i)).collect();
  let result = analyse(&words.join(" "), monday());

  assert_eq!(result.summary, format!("{}...", words[..30].join(" ")));
  assert!(result.summary.ends_with("w30..."));
}

#[test]
fn exactly_30_tokens_is_not_truncated() {
  let words: Vec<String> = (1..=30).map(|i| format!("w{}", i)).collect();
  let result = analyse(&words.join(" "), monday());
  assert_eq!(result.summary, words.join(" "));
}

#[test]
fn high_keyword_matches_regardless_of_casing_and_punctuation() {
  for notes in ["URGENT: sort before Friday", "(urgent!)", "Urgent, please"] {
    let result = analyse(notes, monday());
    assert_eq!(result.priority, Priority::High, "notes: {:?}", notes);
  }
}

#[test]
fn partial_word_does_not_register_a_match() {
  // "scuffed" must not count as the Decoration keyword "scuff".
  let result = analyse("Skirting scuffed in hallway", monday());
  assert_eq!(result.trade, Trade::Other);
  assert_eq!(result.priority, Priority::Medium);
}

#[test]
fn confidence_stays_within_bounds() {
  let inputs = [
    "",
    "nothing recognizable here",
    "urgent leak, water everywhere, gas smell, handover at risk",
    "leak tap pipe trap water boiler socket light switch pendant fuse door",
  ];
  for notes in inputs {
    let result = analyse(notes, monday());
    assert!(
      (20..=100).contains(&result.confidence),
      "confidence {} out of range for {:?}",
      result.confidence,
      notes
    );
  }
}

#[test]
fn due_date_never_lands_on_a_weekend() {
  // Walk a reference date across two full weeks for every priority.
  for offset in 0..14 {
    let reference = NaiveDate::from_ymd_opt(2025, 1, 6 + offset).unwrap();
    for notes in ["urgent", "plain note", "cosmetic"] {
      let result = analyse(notes, reference);
      let due = NaiveDate::parse_from_str(&result.due_date, "%Y-%m-%d").unwrap();
      assert!(due > reference, "due date must be strictly in the future");
      let weekday = due.format("%a").to_string();
      assert!(
        weekday != "Sat" && weekday != "Sun",
        "{} landed on {}",
        result.due_date,
        weekday
      );
    }
  }
}

#[test]
fn deterministic_output_across_runs() {
  let notes = "Landing pendant not centred. Cosmetic only. Plot 37.";
  let a = serde_json::to_string(&analyse(notes, monday())).unwrap();
  let b = serde_json::to_string(&analyse(notes, monday())).unwrap();
  assert_eq!(a, b, "Same inputs must produce identical JSON output");
}

#[test]
fn wire_format_uses_camel_case_field_names() {
  let json = serde_json::to_string(&analyse("leak under sink", monday())).unwrap();
  assert!(json.contains("\"dueDate\""));
  assert!(json.contains("\"defectType\""));
  assert!(json.contains("\"trade\":\"Plumbing\""));
  assert!(json.contains("\"priority\":\"High\""));
}

#[test]
fn input_reference_date_is_optional_on_the_wire() {
  let with_date: snag_engine::Input =
    serde_json::from_str(r#"{"notes": "leak", "referenceDate": "2025-01-13"}"#).unwrap();
  assert_eq!(with_date.reference_date, Some(monday()));

  let without: snag_engine::Input = serde_json::from_str(r#"{"notes": "leak"}"#).unwrap();
  assert!(without.reference_date.is_none());
}
