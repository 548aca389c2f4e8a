//! Working-day due date arithmetic.

use chrono::{Datelike, NaiveDate, Weekday};

/// Advance `working_days` non-weekend days past `start`. The start date is
/// never counted and the result is always a weekday.
pub fn add_working_days(start: NaiveDate, working_days: u32) -> NaiveDate {
  let mut date = start;
  let mut remaining = working_days;
  while remaining > 0 {
    date = match date.succ_opt() {
      Some(next) => next,
      // End of chrono's calendar; saturate instead of panicking.
      None => return date,
    };
    if !is_weekend(date) {
      remaining -= 1;
    }
  }
  date
}

fn is_weekend(date: NaiveDate) -> bool {
  matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Zero-padded YYYY-MM-DD.
pub fn format_iso_date(date: NaiveDate) -> String {
  date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn monday_plus_three_is_thursday() {
    // 2025-01-13 is a Monday.
    let due = add_working_days(date(2025, 1, 13), 3);
    assert_eq!(due, date(2025, 1, 16));
    assert_eq!(due.weekday(), Weekday::Thu);
  }

  #[test]
  fn friday_start_skips_the_weekend() {
    // 2025-01-10 is a Friday; three working days land on Wednesday.
    let due = add_working_days(date(2025, 1, 10), 3);
    assert_eq!(due, date(2025, 1, 15));
  }

  #[test]
  fn weekend_start_is_never_counted() {
    // From Saturday, one working day is Monday.
    let due = add_working_days(date(2025, 1, 11), 1);
    assert_eq!(due, date(2025, 1, 13));
  }

  #[test]
  fn fourteen_working_days_spans_three_weeks() {
    let due = add_working_days(date(2025, 1, 13), 14);
    assert_eq!(due, date(2025, 1, 31));
  }

  #[test]
  fn result_is_never_a_weekend() {
    let start = date(2025, 1, 13);
    for days in 1..30 {
      let due = add_working_days(start, days);
      assert!(!is_weekend(due), "{} working days gave {}", days, due);
    }
  }

  #[test]
  fn iso_format_zero_pads() {
    assert_eq!(format_iso_date(date(2025, 3, 5)), "2025-03-05");
  }
}
