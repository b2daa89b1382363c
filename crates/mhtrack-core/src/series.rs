//! Per-instrument series handed to the charting collaborator.
//!
//! Series follow store order exactly. They are chronological only when the
//! operator entered dates in order; nothing here sorts.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::entry::{ScoreEntry, ScoreField};

/// Charts are suppressed entirely below this many entries.
pub const MIN_CHART_ENTRIES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeriesPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartSeries {
    pub phq9: Vec<SeriesPoint>,
    pub gad7: Vec<SeriesPoint>,
    pub wsas: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn get(&self, field: ScoreField) -> &[SeriesPoint] {
        match field {
            ScoreField::Phq9Total => &self.phq9,
            ScoreField::Gad7Total => &self.gad7,
            ScoreField::WsasTotal => &self.wsas,
        }
    }

    /// PHQ-9, GAD-7, then WSAS.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreField, &[SeriesPoint])> {
        ScoreField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    pub fn len(&self) -> usize {
        self.phq9.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phq9.is_empty()
    }
}

pub fn series_for(entries: &[ScoreEntry], field: ScoreField) -> Vec<SeriesPoint> {
    entries
        .iter()
        .map(|entry| SeriesPoint {
            date: entry.date.to_string(),
            score: entry.score(field),
        })
        .collect()
}

/// Project every entry into the three instrument series.
pub fn build_series(entries: &[ScoreEntry]) -> ChartSeries {
    ChartSeries {
        phq9: series_for(entries, ScoreField::Phq9Total),
        gad7: series_for(entries, ScoreField::Gad7Total),
        wsas: series_for(entries, ScoreField::WsasTotal),
    }
}

/// Series for display, or `None` when there are too few entries to chart.
pub fn chart_series(entries: &[ScoreEntry]) -> Option<ChartSeries> {
    (entries.len() >= MIN_CHART_ENTRIES).then(|| build_series(entries))
}
