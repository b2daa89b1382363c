use jiff::civil::date;
use mhtrack_core::{EntryStore, EntryUpdate, ScoreField};
use mhtrack_instruments::{instrument_charts, InstrumentKind};

#[test]
fn charts_carry_instrument_colours() {
    let mut store = EntryStore::new();
    store.add_dated(date(2024, 1, 1));
    store.add_dated(date(2024, 2, 1));
    store.update_field(1, &EntryUpdate::score(ScoreField::Gad7Total, "9"));

    let charts = instrument_charts(store.entries());

    let summary: Vec<_> = charts
        .iter()
        .map(|c| (c.instrument, c.color.as_str(), c.threshold))
        .collect();
    assert_eq!(
        summary,
        vec![
            (InstrumentKind::Phq9, "#3b82f6", Some(10)),
            (InstrumentKind::Gad7, "#10b981", Some(8)),
            (InstrumentKind::Wsas, "#f59e0b", None),
        ]
    );
    assert_eq!(charts[1].points[1].score, 9);
    assert_eq!(charts[1].points[1].date, "2024-02-01");
}

#[test]
fn no_charts_below_two_entries() {
    let mut store = EntryStore::new();
    store.add_dated(date(2024, 1, 1));
    assert!(instrument_charts(store.entries()).is_empty());
}
