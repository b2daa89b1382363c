use std::fmt;

use jiff::civil::date;
use mhtrack_core::{EntryUpdate, PatientContext, PatientField, ScoreField, SessionSummary};
use mhtrack_session::{
    Confirmation, ConfirmPrompt, PrintOutcome, Session, SessionState, SummaryExporter,
    CONFIRM_PRINT_MESSAGE,
};

/// Records every prompt it is shown and answers with a fixed choice.
struct RecordingPrompt {
    answer: Confirmation,
    shown: Vec<String>,
}

impl RecordingPrompt {
    fn new(answer: Confirmation) -> Self {
        Self {
            answer,
            shown: Vec::new(),
        }
    }
}

impl ConfirmPrompt for RecordingPrompt {
    fn confirm(&mut self, message: &str) -> Confirmation {
        self.shown.push(message.to_string());
        self.answer
    }
}

#[derive(Debug)]
struct PrinterJammed;

impl fmt::Display for PrinterJammed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("printer jammed")
    }
}

#[derive(Default)]
struct FailingExporter {
    calls: usize,
}

impl SummaryExporter for FailingExporter {
    type Error = PrinterJammed;

    fn export(&mut self, _summary: &SessionSummary) -> Result<(), Self::Error> {
        self.calls += 1;
        Err(PrinterJammed)
    }
}

fn filled_session() -> Session {
    let mut session = Session::empty();
    session.add_entry_dated(date(2024, 1, 1));
    session.add_entry_dated(date(2024, 2, 1));
    session.update_field(0, &EntryUpdate::score(ScoreField::Phq9Total, "5"));
    session.update_field(1, &EntryUpdate::score(ScoreField::Phq9Total, "12"));
    session.update_field(1, &EntryUpdate::SuicidalFlag(true));
    session.set_patient_field(PatientField::ProviderName, "Dr Gagnon");
    session.set_patient_field(PatientField::RequestNumber, "T-2024-001");
    session.set_patient_field(PatientField::DateOfBirth, "1980-04-12");
    session.set_patient_field(PatientField::HealthInsuranceNumber, "GAGN 8004 1299");
    session
}

#[test]
fn new_session_has_one_blank_entry() {
    let session = Session::new();
    assert_eq!(session.state(), SessionState::Editing);
    assert_eq!(session.entries().len(), 1);
    assert_eq!(session.entries()[0].phq9_total, 0);
    assert!(session.patient().is_blank());
}

#[test]
fn decline_is_a_true_noop() {
    let mut session = filled_session();
    let entries_before = session.entries().to_vec();
    let patient_before = session.patient().clone();
    let mut prompt = RecordingPrompt::new(Confirmation::Decline);
    let mut exported: Vec<SessionSummary> = Vec::new();

    let outcome = session.request_print(&mut prompt, &mut exported);

    assert_eq!(outcome, PrintOutcome::Declined);
    assert!(!outcome.cleared());
    assert!(exported.is_empty());
    assert_eq!(session.entries(), entries_before.as_slice());
    assert_eq!(session.patient(), &patient_before);
    assert_eq!(session.state(), SessionState::Editing);
    assert_eq!(prompt.shown, vec![CONFIRM_PRINT_MESSAGE.to_string()]);
}

#[test]
fn accept_exports_once_then_clears() {
    let mut session = filled_session();
    let entries_before = session.entries().to_vec();
    let patient_before = session.patient().clone();
    let mut exported: Vec<SessionSummary> = Vec::new();

    let outcome = session.request_print(&mut Confirmation::Accept, &mut exported);

    assert_eq!(outcome, PrintOutcome::Exported);
    assert!(outcome.cleared());
    assert_eq!(exported.len(), 1);
    assert_eq!(exported[0].entries, entries_before);
    assert_eq!(exported[0].patient, patient_before);

    assert!(session.entries().is_empty());
    assert_eq!(session.patient(), &PatientContext::default());
    assert_eq!(session.state(), SessionState::Editing);
}

#[test]
fn export_failure_still_clears() {
    let mut session = filled_session();
    let mut exporter = FailingExporter::default();

    let outcome = session.request_print(&mut Confirmation::Accept, &mut exporter);

    assert_eq!(outcome, PrintOutcome::ExportFailed("printer jammed".to_string()));
    assert!(outcome.cleared());
    assert_eq!(exporter.calls, 1);
    assert!(session.entries().is_empty());
    assert!(session.patient().is_blank());
}

#[test]
fn cleared_session_is_editable_again() {
    let mut session = filled_session();
    let mut exported: Vec<SessionSummary> = Vec::new();
    session.request_print(&mut Confirmation::Accept, &mut exported);

    assert!(session.add_entry());
    assert!(session.set_patient_field(PatientField::ProviderName, "Dr Roy"));
    assert_eq!(session.entries().len(), 1);

    session.request_print(&mut Confirmation::Accept, &mut exported);
    assert_eq!(exported.len(), 2);
    assert_eq!(exported[1].patient.provider_name, "Dr Roy");
}

#[test]
fn split_print_flow_blocks_edits_while_pending() {
    let mut session = filled_session();
    let mut exported: Vec<SessionSummary> = Vec::new();

    assert!(session.begin_print());
    assert_eq!(session.state(), SessionState::ConfirmPending);
    assert!(!session.begin_print());

    assert!(!session.add_entry());
    assert!(!session.remove_entry(0));
    assert!(!session.set_patient_field(PatientField::ProviderName, "someone else"));
    assert_eq!(
        session.request_print(&mut Confirmation::Accept, &mut exported),
        PrintOutcome::Ignored
    );
    assert!(exported.is_empty());

    let outcome = session.resolve_print(Confirmation::Decline, &mut exported);
    assert_eq!(outcome, PrintOutcome::Declined);
    assert_eq!(session.patient().provider_name, "Dr Gagnon");
    assert_eq!(session.entries().len(), 2);
}

#[test]
fn resolve_without_begin_is_ignored() {
    let mut session = filled_session();
    let mut exported: Vec<SessionSummary> = Vec::new();

    let outcome = session.resolve_print(Confirmation::Accept, &mut exported);

    assert_eq!(outcome, PrintOutcome::Ignored);
    assert!(exported.is_empty());
    assert_eq!(session.entries().len(), 2);
}

#[test]
fn entry_cap_applies_through_session() {
    let mut session = Session::new();
    while session.add_entry() {}

    assert_eq!(session.entries().len(), mhtrack_core::MAX_ENTRIES);
    assert!(!session.can_add_entry());
}

#[test]
fn chart_series_needs_two_entries() {
    let mut session = Session::new();
    assert!(session.chart_series().is_none());

    session.add_entry();
    assert_eq!(session.chart_series().unwrap().len(), 2);
}

#[test]
fn remove_keeps_relative_order() {
    let mut session = Session::empty();
    for day in 1..=3 {
        session.add_entry_dated(date(2024, 3, day));
    }

    assert!(session.remove_entry(1));

    let dates: Vec<_> = session.entries().iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2024, 3, 1), date(2024, 3, 3)]);
}
