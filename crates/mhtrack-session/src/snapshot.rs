use mhtrack_core::{PatientContext, ScoreEntry};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::lifecycle::SessionState;

/// What a presentation layer sees after each change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub revision: u64,
    pub state: SessionState,
    pub patient: PatientContext,
    pub entries: Vec<ScoreEntry>,
}
