use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::InstrumentKind;

/// Inclusive integer range of a questionnaire item or total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One questionnaire item. Only the total is entered; items document
/// where the total range comes from.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub range: ScoreRange,
}

/// Advisory notice that a total lies outside the instrument's range.
///
/// The store keeps such values; this only feeds display hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct RangeWarning {
    pub instrument: InstrumentKind,
    pub value: u32,
    pub expected_range: ScoreRange,
    pub message: String,
}

pub(crate) fn items_from(range: ScoreRange, items: &[(&str, &str)]) -> Vec<Item> {
    items
        .iter()
        .map(|(id, name)| Item {
            id: id.to_string(),
            name: name.to_string(),
            range,
        })
        .collect()
}
