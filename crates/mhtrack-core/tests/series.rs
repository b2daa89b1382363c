use jiff::civil::date;
use mhtrack_core::series::{build_series, chart_series, series_for, SeriesPoint};
use mhtrack_core::{EntryStore, EntryUpdate, ScoreField};

fn point(date: &str, score: u32) -> SeriesPoint {
    SeriesPoint {
        date: date.to_string(),
        score,
    }
}

#[test]
fn phq9_series_follows_store_order() {
    let mut store = EntryStore::new();
    store.add_dated(date(2024, 1, 1));
    store.add_dated(date(2024, 2, 1));
    store.update_field(0, &EntryUpdate::score(ScoreField::Phq9Total, "5"));
    store.update_field(1, &EntryUpdate::score(ScoreField::Phq9Total, "12"));

    let series = series_for(store.entries(), ScoreField::Phq9Total);

    assert_eq!(series, vec![point("2024-01-01", 5), point("2024-02-01", 12)]);
}

#[test]
fn series_are_not_sorted_by_date() {
    let mut store = EntryStore::new();
    store.add_dated(date(2024, 3, 1));
    store.add_dated(date(2024, 1, 1));
    store.update_field(0, &EntryUpdate::score(ScoreField::WsasTotal, "30"));

    let series = build_series(store.entries());

    assert_eq!(series.wsas, vec![point("2024-03-01", 30), point("2024-01-01", 0)]);
}

#[test]
fn every_series_matches_store_length() {
    let mut store = EntryStore::new();
    for day in 1..=4 {
        store.add_dated(date(2024, 6, day));
    }

    let series = build_series(store.entries());

    for (_, points) in series.iter() {
        assert_eq!(points.len(), store.len());
    }
    let order: Vec<_> = series.iter().map(|(field, _)| field).collect();
    assert_eq!(order, ScoreField::ALL.to_vec());
}

#[test]
fn chart_suppressed_below_two_entries() {
    let mut store = EntryStore::new();
    assert!(chart_series(store.entries()).is_none());

    store.add_dated(date(2024, 1, 1));
    assert!(chart_series(store.entries()).is_none());

    store.add_dated(date(2024, 1, 8));
    let series = chart_series(store.entries()).unwrap();
    assert_eq!(series.len(), 2);
}

#[test]
fn empty_store_builds_empty_series() {
    let series = build_series(&[]);
    assert!(series.is_empty());
    assert!(series.gad7.is_empty());
    assert!(series.wsas.is_empty());
}
