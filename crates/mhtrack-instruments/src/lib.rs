//! mhtrack-instruments
//!
//! Questionnaire definitions (PHQ-9, GAD-7, WSAS) and the clinical
//! threshold classifier. Pure data and pure functions.

pub mod charts;
pub mod classify;
pub mod error;
pub mod instruments;
pub mod scoring;

use std::fmt;
use std::str::FromStr;

use mhtrack_core::ScoreField;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use charts::{instrument_charts, InstrumentChart};
pub use classify::{
    classify, classify_entry, Classification, EntryClassification, SuicidalIdeation,
    ThresholdBucket,
};
pub use error::InstrumentError;
use scoring::{Item, RangeWarning, ScoreRange};

/// The three instruments tracked per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentKind {
    Phq9,
    Gad7,
    Wsas,
}

impl InstrumentKind {
    pub const ALL: [InstrumentKind; 3] =
        [InstrumentKind::Phq9, InstrumentKind::Gad7, InstrumentKind::Wsas];

    pub fn id(&self) -> &'static str {
        match self {
            InstrumentKind::Phq9 => "phq9",
            InstrumentKind::Gad7 => "gad7",
            InstrumentKind::Wsas => "wsas",
        }
    }

    /// The entry field holding this instrument's total.
    pub fn field(&self) -> ScoreField {
        match self {
            InstrumentKind::Phq9 => ScoreField::Phq9Total,
            InstrumentKind::Gad7 => ScoreField::Gad7Total,
            InstrumentKind::Wsas => ScoreField::WsasTotal,
        }
    }

    pub fn instrument(&self) -> &'static dyn Instrument {
        match self {
            InstrumentKind::Phq9 => &instruments::phq9::Phq9,
            InstrumentKind::Gad7 => &instruments::gad7::Gad7,
            InstrumentKind::Wsas => &instruments::wsas::Wsas,
        }
    }
}

impl From<ScoreField> for InstrumentKind {
    fn from(field: ScoreField) -> Self {
        match field {
            ScoreField::Phq9Total => InstrumentKind::Phq9,
            ScoreField::Gad7Total => InstrumentKind::Gad7,
            ScoreField::WsasTotal => InstrumentKind::Wsas,
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for InstrumentKind {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstrumentKind::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| InstrumentError::UnknownInstrument(s.to_string()))
    }
}

/// Trait implemented by each questionnaire.
pub trait Instrument: Send + Sync {
    fn kind(&self) -> InstrumentKind;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    fn items(&self) -> &[Item];

    /// Clinical cut-off; totals at or above it are flagged.
    /// `None` when the instrument is shown as a raw total only.
    fn threshold(&self) -> Option<u32>;

    /// Bar colour used by the charting collaborator.
    fn chart_color(&self) -> &str;

    /// Sum of the item ranges.
    fn total_range(&self) -> ScoreRange {
        self.items()
            .iter()
            .fold(ScoreRange::new(0, 0), |acc, item| {
                ScoreRange::new(acc.min + item.range.min, acc.max + item.range.max)
            })
    }

    /// Advisory range check on an entered total.
    fn check_total(&self, value: u32) -> Option<RangeWarning> {
        let range = self.total_range();
        if range.contains(value) {
            return None;
        }
        Some(RangeWarning {
            instrument: self.kind(),
            value,
            expected_range: range,
            message: format!(
                "{}: total {} is outside range [{}, {}]",
                self.name(),
                value,
                range.min,
                range.max,
            ),
        })
    }
}

/// Return all registered instruments, in display order.
pub fn all_instruments() -> Vec<&'static dyn Instrument> {
    InstrumentKind::ALL.iter().map(|k| k.instrument()).collect()
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<&'static dyn Instrument, InstrumentError> {
    id.parse::<InstrumentKind>().map(|k| k.instrument())
}

pub fn check_total(kind: InstrumentKind, value: u32) -> Option<RangeWarning> {
    kind.instrument().check_total(value)
}
