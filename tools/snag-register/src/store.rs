//! Persistent register: a JSON array on disk, seeded when missing or corrupt.

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, SecondsFormat, Utc};

use crate::error::RegisterError;
use crate::seed;
use crate::types::{SnagDraft, SnagRecord};

/// Fixed storage file name — the register's storage key.
pub const STORAGE_FILE: &str = "snag-tracker-snags.json";

/// In-memory register. Loading and saving are explicit; record operations
/// are plain Vec manipulation so they stay easy to test.
#[derive(Debug, Default)]
pub struct Register {
    records: Vec<SnagRecord>,
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<SnagRecord>) -> Self {
        Self { records }
    }

    /// Load from `path`. A missing or unparseable file falls back to seeded
    /// sample data rather than surfacing an error; a fresh or damaged
    /// register starts usable.
    pub fn load(path: &Path, today: NaiveDate) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::from_records(seed::seed_records(today, &now_iso())),
        };
        match serde_json::from_str::<Vec<SnagRecord>>(&raw) {
            Ok(records) => Self::from_records(records),
            Err(_) => Self::from_records(seed::seed_records(today, &now_iso())),
        }
    }

    /// Rewrite the whole array to `path`.
    pub fn save(&self, path: &Path) -> Result<(), RegisterError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn records(&self) -> &[SnagRecord] {
        &self.records
    }

    /// Validate, analyse, and prepend a new record.
    pub fn add(
        &mut self,
        draft: &SnagDraft,
        today: NaiveDate,
    ) -> Result<&SnagRecord, RegisterError> {
        self.add_at(draft, today, &now_iso())
    }

    pub fn add_at(
        &mut self,
        draft: &SnagDraft,
        today: NaiveDate,
        timestamp: &str,
    ) -> Result<&SnagRecord, RegisterError> {
        let draft = draft.trimmed();
        validate(&draft)?;
        let analysis = snag_engine::analyse(&draft.notes, today);
        let record = SnagRecord::assemble(&draft, analysis, timestamp, None);
        self.records.insert(0, record);
        Ok(&self.records[0])
    }

    /// Re-analyse and replace an existing record, keeping id and createdAt.
    pub fn update(
        &mut self,
        id: &str,
        draft: &SnagDraft,
        today: NaiveDate,
    ) -> Result<&SnagRecord, RegisterError> {
        self.update_at(id, draft, today, &now_iso())
    }

    pub fn update_at(
        &mut self,
        id: &str,
        draft: &SnagDraft,
        today: NaiveDate,
        timestamp: &str,
    ) -> Result<&SnagRecord, RegisterError> {
        let draft = draft.trimmed();
        validate(&draft)?;
        let index = self
            .index_of(id)
            .ok_or_else(|| RegisterError::NotFound(id.to_string()))?;
        let analysis = snag_engine::analyse(&draft.notes, today);
        let record = SnagRecord::assemble(&draft, analysis, timestamp, Some(&self.records[index]));
        self.records[index] = record;
        Ok(&self.records[index])
    }

    pub fn delete(&mut self, id: &str) -> Result<SnagRecord, RegisterError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| RegisterError::NotFound(id.to_string()))?;
        Ok(self.records.remove(index))
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

/// Title and notes must be non-blank before the engine runs; the engine
/// itself accepts any text.
fn validate(draft: &SnagDraft) -> Result<(), RegisterError> {
    if draft.title.is_empty() {
        return Err(RegisterError::validation("title", "must not be empty"));
    }
    if draft.notes.is_empty() {
        return Err(RegisterError::validation("notes", "must not be empty"));
    }
    Ok(())
}

/// RFC3339 UTC with millisecond precision.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
