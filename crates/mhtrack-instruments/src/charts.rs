use mhtrack_core::series::{chart_series, SeriesPoint};
use mhtrack_core::ScoreEntry;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::InstrumentKind;

/// One bar chart for the charting collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentChart {
    pub instrument: InstrumentKind,
    /// CSS hex colour, e.g. `#3b82f6`.
    pub color: String,
    pub threshold: Option<u32>,
    pub points: Vec<SeriesPoint>,
}

/// Charts in display order, or an empty list below two entries.
pub fn instrument_charts(entries: &[ScoreEntry]) -> Vec<InstrumentChart> {
    let Some(series) = chart_series(entries) else {
        return Vec::new();
    };
    series
        .iter()
        .map(|(field, points)| {
            let instrument = InstrumentKind::from(field);
            let definition = instrument.instrument();
            InstrumentChart {
                instrument,
                color: definition.chart_color().to_string(),
                threshold: definition.threshold(),
                points: points.to_vec(),
            }
        })
        .collect()
}
