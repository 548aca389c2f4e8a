//! Excel-friendly CSV export of the current register view.

use chrono::NaiveDate;

use crate::types::SnagRecord;

const HEADERS: [&str; 9] = [
    "Title",
    "Summary",
    "Trade",
    "Priority",
    "Due Date",
    "Plot",
    "Development",
    "Notes",
    "Defect Keyword",
];

/// Render records as CSV: every field double-quoted with internal quotes
/// doubled, fields joined by commas, rows joined by CRLF. An empty view
/// exports as an empty string — no header-only files.
pub fn to_csv(records: &[&SnagRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut rows: Vec<String> = Vec::with_capacity(records.len() + 1);
    rows.push(csv_row(HEADERS.iter().map(|h| h.to_string())));
    for record in records {
        rows.push(csv_row(
            [
                record.title.clone(),
                record.summary.clone(),
                record.trade.as_str().to_string(),
                record.priority.as_str().to_string(),
                record.due_date.clone(),
                record.plot.clone(),
                record.development.clone(),
                record.notes.clone(),
                record.defect_type.clone(),
            ]
            .into_iter(),
        ));
    }
    rows.join("\r\n")
}

fn csv_row(fields: impl Iterator<Item = String>) -> String {
    fields
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Timestamped default file name so repeated exports do not clash.
pub fn export_filename(date: NaiveDate) -> String {
    format!("snag-tracker-{}.csv", date.format("%Y-%m-%d"))
}
