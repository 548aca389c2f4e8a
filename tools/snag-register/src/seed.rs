//! Sample records to make a fresh register immediately useful.

use chrono::NaiveDate;

use crate::types::{SnagDraft, SnagRecord};

/// (title, notes, plot, development) for the canned starter snags.
const SAMPLE_SNAGS: [(&str, &str, &str, &str); 4] = [
    (
        "En-suite basin trap leaking",
        "En-suite basin trap leaking, slow drip onto vanity. Plot 14. Customer due to move Friday.",
        "Plot 14",
        "Willow Grove",
    ),
    (
        "Kitchen island door misaligned",
        "Kitchen island unit door misaligned by roughly 5mm. Hinges need adjusting. Plot 21.",
        "Plot 21",
        "Maple Chase",
    ),
    (
        "External tap not live",
        "External tap not live. Suspect isolation valve left off. P3.",
        "Plot 3",
        "Willow Grove",
    ),
    (
        "Landing pendant alignment",
        "Landing pendant not centred. Cosmetic only. Plot 37.",
        "Plot 37",
        "Orchard Rise",
    ),
];

/// Run the canned notes through the engine to build fully-analysed records.
pub fn seed_records(today: NaiveDate, timestamp: &str) -> Vec<SnagRecord> {
    SAMPLE_SNAGS
        .iter()
        .map(|(title, notes, plot, development)| {
            let draft = SnagDraft {
                title: title.to_string(),
                notes: notes.to_string(),
                plot: plot.to_string(),
                development: development.to_string(),
                photo_url: String::new(),
            };
            SnagRecord::assemble(&draft, snag_engine::analyse(notes, today), timestamp, None)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use snag_engine::{Priority, Trade};

    #[test]
    fn seeds_are_fully_analysed() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 13).unwrap();
        let records = seed_records(today, "t");
        assert_eq!(records.len(), 4);

        for record in &records {
            assert!(!record.id.is_empty());
            assert!(!record.summary.is_empty());
            assert!(!record.defect_type.is_empty());
            assert!((20..=100).contains(&record.confidence));
        }

        // The external tap seed exercises the High/Plumbing path.
        let tap = records
            .iter()
            .find(|r| r.title == "External tap not live")
            .unwrap();
        assert_eq!(tap.trade, Trade::Plumbing);
        assert_eq!(tap.priority, Priority::High);
        assert_eq!(tap.due_date, "2025-01-16");
    }
}
