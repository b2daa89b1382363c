use mhtrack_core::ScoreEntry;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::InstrumentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ThresholdBucket {
    Above,
    Below,
    /// The instrument has no clinical threshold.
    NotApplicable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    pub instrument: InstrumentKind,
    pub score: u32,
    pub threshold: Option<u32>,
    pub above_threshold: bool,
}

impl Classification {
    pub fn bucket(&self) -> ThresholdBucket {
        match (self.threshold, self.above_threshold) {
            (None, _) => ThresholdBucket::NotApplicable,
            (Some(_), true) => ThresholdBucket::Above,
            (Some(_), false) => ThresholdBucket::Below,
        }
    }
}

/// Classify a total against the instrument's clinical threshold.
///
/// A score equal to the threshold counts as above it.
pub fn classify(instrument: InstrumentKind, score: u32) -> Classification {
    let threshold = instrument.instrument().threshold();
    Classification {
        instrument,
        score,
        threshold,
        above_threshold: threshold.is_some_and(|t| score >= t),
    }
}

/// The operator-set ideation indicator. Independent of every score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SuicidalIdeation {
    Present,
    Absent,
}

impl SuicidalIdeation {
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            SuicidalIdeation::Present
        } else {
            SuicidalIdeation::Absent
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, SuicidalIdeation::Present)
    }
}

/// Display classification for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntryClassification {
    pub phq9: Classification,
    pub gad7: Classification,
    pub wsas: Classification,
    pub suicidal_ideation: SuicidalIdeation,
}

pub fn classify_entry(entry: &ScoreEntry) -> EntryClassification {
    let by_kind = |kind: InstrumentKind| classify(kind, entry.score(kind.field()));
    EntryClassification {
        phq9: by_kind(InstrumentKind::Phq9),
        gad7: by_kind(InstrumentKind::Gad7),
        wsas: by_kind(InstrumentKind::Wsas),
        suicidal_ideation: SuicidalIdeation::from_flag(entry.suicidal_flag),
    }
}
