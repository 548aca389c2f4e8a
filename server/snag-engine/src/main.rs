//! Binary entrypoint: read one JSON object from stdin, write one to stdout.
//!
//! Input: {"notes": "...", "referenceDate": "YYYY-MM-DD"} — referenceDate is
//! optional and defaults to today's local date. Output: the analysis result
//! as JSON, or a structured error object when the input does not parse.

use chrono::Local;
use snag_engine::{analyse, ErrorOutput, Input};
use std::io::{self, Read, Write};

fn main() {
  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "snag-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let input: Input = match serde_json::from_str(&raw) {
    Ok(v) => v,
    Err(e) => {
      let err = ErrorOutput::new(format!("json parse: {}", e));
      let json = serde_json::to_vec(&err)?;
      io::stdout().write_all(&json)?;
      std::process::exit(2);
    }
  };

  let reference = input
    .reference_date
    .unwrap_or_else(|| Local::now().date_naive());
  let result = analyse(&input.notes, reference);
  let json = serde_json::to_vec(&result)?;
  io::stdout().write_all(&json)?;
  Ok(())
}
