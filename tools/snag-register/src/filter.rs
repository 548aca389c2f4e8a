//! Filtering, search, and sorting over register records.

use snag_engine::Priority;

use crate::types::SnagRecord;

/// View controls for list/export. `None` filters mean "All".
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub development: Option<String>,
    pub trade: Option<String>,
    pub priority: Option<Priority>,
    pub search: String,
    pub descending: bool,
}

/// Apply filters and search, then sort by due date with createdAt as the
/// stable secondary key.
pub fn filtered<'a>(records: &'a [SnagRecord], opts: &FilterOptions) -> Vec<&'a SnagRecord> {
    let mut rows: Vec<&SnagRecord> = records
        .iter()
        .filter(|r| matches_filters(r, opts) && matches_search(r, &opts.search))
        .collect();

    rows.sort_by(|a, b| {
        let key_a = (a.due_date.as_str(), a.created_at.as_str());
        let key_b = (b.due_date.as_str(), b.created_at.as_str());
        if opts.descending {
            key_b.cmp(&key_a)
        } else {
            key_a.cmp(&key_b)
        }
    });

    rows
}

fn matches_filters(record: &SnagRecord, opts: &FilterOptions) -> bool {
    let development_ok = opts
        .development
        .as_ref()
        .map_or(true, |d| record.development.eq_ignore_ascii_case(d));
    let trade_ok = opts
        .trade
        .as_ref()
        .map_or(true, |t| record.trade.as_str().eq_ignore_ascii_case(t));
    let priority_ok = opts.priority.map_or(true, |p| record.priority == p);
    development_ok && trade_ok && priority_ok
}

/// Case-insensitive substring search across the fields a site manager scans
/// by eye. A blank term matches everything.
fn matches_search(record: &SnagRecord, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    let haystack = [
        record.title.as_str(),
        record.summary.as_str(),
        record.notes.as_str(),
        record.plot.as_str(),
        record.development.as_str(),
        record.trade.as_str(),
        record.priority.as_str(),
        record.defect_type.as_str(),
    ]
    .join(" ")
    .to_lowercase();
    haystack.contains(&term)
}

/// Distinct development names, sorted, for a filter dropdown.
pub fn development_options(records: &[SnagRecord]) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .filter(|r| !r.development.is_empty())
        .map(|r| r.development.clone())
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Distinct trades present in the register, sorted.
pub fn trade_options(records: &[SnagRecord]) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .map(|r| r.trade.as_str().to_string())
        .collect();
    values.sort();
    values.dedup();
    values
}
