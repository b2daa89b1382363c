use jiff::civil::Date;
use mhtrack_core::series::{chart_series, ChartSeries};
use mhtrack_core::{EntryStore, EntryUpdate, PatientContext, PatientField, ScoreEntry, SessionSummary};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{error, info};
use ts_rs::TS;
use uuid::Uuid;

use crate::collaborators::{Confirmation, ConfirmPrompt, SummaryExporter, CONFIRM_PRINT_MESSAGE};
use crate::snapshot::SessionSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionState {
    Editing,
    /// The confirmation prompt is open; edits are ignored.
    ConfirmPending,
    /// Published once after the wipe, then the session is `Editing` again.
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    Declined,
    Exported,
    /// The exporter failed. The session was cleared anyway.
    ExportFailed(String),
    /// No print was pending, or one was already pending.
    Ignored,
}

impl PrintOutcome {
    pub fn cleared(&self) -> bool {
        matches!(self, PrintOutcome::Exported | PrintOutcome::ExportFailed(_))
    }
}

/// One patient encounter.
///
/// Every applied change publishes a [`SessionSnapshot`] on a watch
/// channel. No-op calls (cap reached, bad index, edits while a print is
/// pending) publish nothing.
pub struct Session {
    id: Uuid,
    store: EntryStore,
    patient: PatientContext,
    state: SessionState,
    revision: u64,
    snapshots: watch::Sender<SessionSnapshot>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session holding one blank entry dated today.
    pub fn new() -> Self {
        let mut store = EntryStore::new();
        store.add();
        Self::with_store(store)
    }

    /// A fresh session with no entries.
    pub fn empty() -> Self {
        Self::with_store(EntryStore::new())
    }

    fn with_store(store: EntryStore) -> Self {
        let id = Uuid::new_v4();
        let initial = SessionSnapshot {
            session_id: id,
            revision: 0,
            state: SessionState::Editing,
            patient: PatientContext::default(),
            entries: store.entries().to_vec(),
        };
        let (snapshots, _) = watch::channel(initial);
        info!(session = %id, entries = store.len(), "session opened");
        Self {
            id,
            store,
            patient: PatientContext::default(),
            state: SessionState::Editing,
            revision: 0,
            snapshots,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        self.store.entries()
    }

    pub fn patient(&self) -> &PatientContext {
        &self.patient
    }

    pub fn can_add_entry(&self) -> bool {
        self.is_editing() && !self.store.is_full()
    }

    /// Series for the charting collaborator, `None` below two entries.
    pub fn chart_series(&self) -> Option<ChartSeries> {
        chart_series(self.store.entries())
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.subscribe()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn add_entry(&mut self) -> bool {
        self.edit(|s| s.store.add())
    }

    pub fn add_entry_dated(&mut self, date: Date) -> bool {
        self.edit(|s| s.store.add_dated(date))
    }

    pub fn remove_entry(&mut self, index: usize) -> bool {
        self.edit(|s| s.store.remove(index))
    }

    pub fn update_date(&mut self, index: usize, date: Date) -> bool {
        self.edit(|s| s.store.update_date(index, date))
    }

    pub fn update_field(&mut self, index: usize, update: &EntryUpdate) -> bool {
        self.edit(|s| s.store.update_field(index, update))
    }

    pub fn set_patient_field(&mut self, field: PatientField, value: impl Into<String>) -> bool {
        let value = value.into();
        self.edit(|s| {
            s.patient.set(field, value);
            true
        })
    }

    /// Ask the operator to confirm, then export and clear on acceptance.
    pub fn request_print<P, X>(&mut self, prompt: &mut P, exporter: &mut X) -> PrintOutcome
    where
        P: ConfirmPrompt + ?Sized,
        X: SummaryExporter + ?Sized,
    {
        if !self.begin_print() {
            return PrintOutcome::Ignored;
        }
        let confirmation = prompt.confirm(CONFIRM_PRINT_MESSAGE);
        self.resolve_print(confirmation, exporter)
    }

    /// `Editing → ConfirmPending`. Returns `false` from any other state.
    pub fn begin_print(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.state = SessionState::ConfirmPending;
        self.publish();
        info!(session = %self.id, "print confirmation requested");
        true
    }

    /// Settle a pending print. Acceptance exports exactly once and then
    /// wipes entries and patient data whatever the exporter returned.
    pub fn resolve_print<X>(&mut self, confirmation: Confirmation, exporter: &mut X) -> PrintOutcome
    where
        X: SummaryExporter + ?Sized,
    {
        if self.state != SessionState::ConfirmPending {
            return PrintOutcome::Ignored;
        }

        if confirmation == Confirmation::Decline {
            self.state = SessionState::Editing;
            self.publish();
            info!(session = %self.id, "print declined");
            return PrintOutcome::Declined;
        }

        let summary = SessionSummary::new(self.patient.clone(), self.store.entries().to_vec());
        let outcome = match exporter.export(&summary) {
            Ok(()) => {
                info!(session = %self.id, entries = summary.entries.len(), "summary exported");
                PrintOutcome::Exported
            }
            Err(e) => {
                error!(session = %self.id, error = %e, "summary export failed");
                PrintOutcome::ExportFailed(e.to_string())
            }
        };

        self.clear();
        outcome
    }

    fn clear(&mut self) {
        self.store.clear();
        self.patient.clear();
        self.state = SessionState::Cleared;
        self.publish();
        info!(session = %self.id, "session cleared");

        self.state = SessionState::Editing;
        self.publish();
    }

    fn is_editing(&self) -> bool {
        self.state == SessionState::Editing
    }

    fn edit(&mut self, op: impl FnOnce(&mut Self) -> bool) -> bool {
        if !self.is_editing() {
            return false;
        }
        let changed = op(self);
        if changed {
            self.publish();
        }
        changed
    }

    fn publish(&mut self) {
        self.revision += 1;
        self.snapshots.send_replace(SessionSnapshot {
            session_id: self.id,
            revision: self.revision,
            state: self.state,
            patient: self.patient.clone(),
            entries: self.store.entries().to_vec(),
        });
    }
}
