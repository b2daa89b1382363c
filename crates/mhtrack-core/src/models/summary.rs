use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entry::ScoreEntry;
use super::patient::PatientContext;

/// Everything the print collaborator receives for one confirmed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSummary {
    pub patient: PatientContext,
    pub entries: Vec<ScoreEntry>,
    pub generated_at: jiff::Timestamp,
}

impl SessionSummary {
    pub fn new(patient: PatientContext, entries: Vec<ScoreEntry>) -> Self {
        Self {
            patient,
            entries,
            generated_at: jiff::Timestamp::now(),
        }
    }
}
