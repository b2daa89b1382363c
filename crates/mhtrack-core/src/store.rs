use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::models::entry::{coerce_score, today_utc, EntryUpdate, ScoreEntry};

/// Maximum number of dated entries per session.
pub const MAX_ENTRIES: usize = 10;

/// Ordered, capacity-bounded collection of score entries.
///
/// Insertion order is the display and chart order; entries are never
/// re-sorted by date. Every operation that changes the contents bumps
/// [`EntryStore::revision`]. Calls that change nothing (adding at the cap,
/// an index past the end) are silent no-ops and leave the revision alone.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<ScoreEntry>,
    revision: u64,
}

/// An owned copy of the store contents at one revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoreSnapshot {
    pub revision: u64,
    pub entries: Vec<ScoreEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank entry dated today. Returns `false` at the cap.
    pub fn add(&mut self) -> bool {
        self.add_dated(today_utc())
    }

    /// Append a blank entry with an explicit date. Returns `false` at the cap.
    pub fn add_dated(&mut self, date: Date) -> bool {
        if self.is_full() {
            debug!(len = self.entries.len(), "entry cap reached, add ignored");
            return false;
        }
        self.entries.push(ScoreEntry::new(date));
        self.touch();
        debug!(len = self.entries.len(), "entry added");
        true
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        self.touch();
        debug!(index, len = self.entries.len(), "entry removed");
        true
    }

    pub fn update_date(&mut self, index: usize, date: Date) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        entry.date = date;
        self.touch();
        debug!(index, "entry date updated");
        true
    }

    /// Apply one field edit. Numeric text is coerced, never rejected.
    pub fn update_field(&mut self, index: usize, update: &EntryUpdate) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        match update {
            EntryUpdate::Score(field, raw) => {
                entry.set_score(*field, coerce_score(raw));
                debug!(index, field = %field, "entry score updated");
            }
            EntryUpdate::SuicidalFlag(flag) => {
                entry.suicidal_flag = *flag;
                debug!(index, "entry suicidal flag updated");
            }
        }
        self.touch();
        true
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.touch();
        debug!("entry store cleared");
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ScoreEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_ENTRIES
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            revision: self.revision,
            entries: self.entries.clone(),
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
