use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One dated measurement: the three questionnaire totals plus the
/// suicidal-ideation indicator.
///
/// Totals are plain non-negative integers. The instrument ranges (PHQ-9
/// 0–27, GAD-7 0–21, WSAS 0–40) are advisory and not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub date: Date,
    pub phq9_total: u32,
    pub gad7_total: u32,
    pub wsas_total: u32,
    pub suicidal_flag: bool,
}

impl ScoreEntry {
    /// A blank entry for `date`: all totals zero, no ideation.
    pub fn new(date: Date) -> Self {
        Self {
            date,
            phq9_total: 0,
            gad7_total: 0,
            wsas_total: 0,
            suicidal_flag: false,
        }
    }

    pub fn score(&self, field: ScoreField) -> u32 {
        match field {
            ScoreField::Phq9Total => self.phq9_total,
            ScoreField::Gad7Total => self.gad7_total,
            ScoreField::WsasTotal => self.wsas_total,
        }
    }

    pub(crate) fn set_score(&mut self, field: ScoreField, value: u32) {
        let slot = match field {
            ScoreField::Phq9Total => &mut self.phq9_total,
            ScoreField::Gad7Total => &mut self.gad7_total,
            ScoreField::WsasTotal => &mut self.wsas_total,
        };
        *slot = value;
    }
}

/// The numeric fields of a [`ScoreEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreField {
    Phq9Total,
    Gad7Total,
    WsasTotal,
}

impl ScoreField {
    /// Chart and display order.
    pub const ALL: [ScoreField; 3] = [
        ScoreField::Phq9Total,
        ScoreField::Gad7Total,
        ScoreField::WsasTotal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreField::Phq9Total => "phq9_total",
            ScoreField::Gad7Total => "gad7_total",
            ScoreField::WsasTotal => "wsas_total",
        }
    }
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoreField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// A single field edit coming from the input layer.
///
/// Numeric fields carry the raw widget text; it is coerced with
/// [`coerce_score`] when applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum EntryUpdate {
    Score(ScoreField, String),
    SuicidalFlag(bool),
}

impl EntryUpdate {
    pub fn score(field: ScoreField, raw: impl Into<String>) -> Self {
        EntryUpdate::Score(field, raw.into())
    }
}

/// Coerce free-text widget input into a score.
///
/// Takes the leading integer of the trimmed text (`"12abc"` → 12,
/// `"3.7"` → 3). Anything without leading digits, and any negative
/// value, becomes 0. Overlong digit runs saturate at `u32::MAX`.
pub fn coerce_score(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if negative || digit_count == 0 {
        return 0;
    }

    rest.bytes().take(digit_count).fold(0u32, |acc, d| {
        acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    })
}

/// Parse an ISO `YYYY-MM-DD` date as sent by a date input.
pub fn parse_entry_date(input: &str) -> Result<Date, CoreError> {
    input
        .trim()
        .parse::<Date>()
        .map_err(|source| CoreError::InvalidDate {
            input: input.to_string(),
            source,
        })
}

/// Today's calendar date in UTC, the default date of a new entry.
pub fn today_utc() -> Date {
    jiff::Timestamp::now()
        .to_zoned(jiff::tz::TimeZone::UTC)
        .date()
}
