//! mhtrack-core
//!
//! Session-scoped domain types for the score tracker: dated score entries,
//! patient identification, the bounded entry store and the chart series
//! projection. Nothing here touches disk or the network.

pub mod error;
pub mod models;
pub mod series;
pub mod store;

pub use error::CoreError;
pub use models::entry::{
    coerce_score, parse_entry_date, today_utc, EntryUpdate, ScoreEntry, ScoreField,
};
pub use models::patient::{PatientContext, PatientField};
pub use models::summary::SessionSummary;
pub use store::{EntryStore, StoreSnapshot, MAX_ENTRIES};
