//! Record types for the snag register. Records serialize with camelCase
//! keys.

use serde::{Deserialize, Serialize};
use snag_engine::{AnalysisResult, Priority, Trade};

/// User-supplied fields for a new or edited snag.
#[derive(Debug, Clone, Default)]
pub struct SnagDraft {
    pub title: String,
    pub notes: String,
    pub plot: String,
    pub development: String,
    pub photo_url: String,
}

impl SnagDraft {
    /// Copy with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> SnagDraft {
        SnagDraft {
            title: self.title.trim().to_string(),
            notes: self.notes.trim().to_string(),
            plot: self.plot.trim().to_string(),
            development: self.development.trim().to_string(),
            photo_url: self.photo_url.trim().to_string(),
        }
    }
}

/// One persisted register entry: draft fields + analysis output + identity.
///
/// The analysis block is immutable — edits re-analyse the notes and replace
/// it whole, never field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnagRecord {
    pub id: String,
    pub title: String,
    pub notes: String,
    pub plot: String,
    pub development: String,
    pub photo_url: String,
    pub summary: String,
    pub trade: Trade,
    pub priority: Priority,
    pub due_date: String,
    pub defect_type: String,
    pub confidence: u8,
    pub created_at: String,
    pub updated_at: String,
}

impl SnagRecord {
    /// Assemble a record from a draft and a fresh analysis. Editing passes
    /// `base` so the id and createdAt survive.
    pub fn assemble(
        draft: &SnagDraft,
        analysis: AnalysisResult,
        timestamp: &str,
        base: Option<&SnagRecord>,
    ) -> SnagRecord {
        SnagRecord {
            id: base.map_or_else(new_id, |b| b.id.clone()),
            title: draft.title.clone(),
            notes: draft.notes.clone(),
            plot: draft.plot.clone(),
            development: draft.development.clone(),
            photo_url: draft.photo_url.clone(),
            summary: analysis.summary,
            trade: analysis.trade,
            priority: analysis.priority,
            due_date: analysis.due_date,
            defect_type: analysis.defect_type,
            confidence: analysis.confidence,
            created_at: base.map_or_else(|| timestamp.to_string(), |b| b.created_at.clone()),
            updated_at: timestamp.to_string(),
        }
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
