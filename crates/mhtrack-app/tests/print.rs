use mhtrack_app::{DocxFileExporter, TrackerConfig};
use mhtrack_core::{EntryUpdate, PatientField, ScoreField};
use mhtrack_export::{DocumentStyles, Labels};
use mhtrack_session::{Confirmation, PrintOutcome, Session, SummaryExporter};

fn exporter_in(dir: &std::path::Path) -> DocxFileExporter {
    DocxFileExporter::new(dir, Labels::default(), DocumentStyles::default())
}

#[test]
fn confirmed_print_writes_one_docx_and_clears() {
    let dir = tempfile::tempdir().unwrap();
    let mut exporter = exporter_in(&dir.path().join("summaries"));

    let mut session = Session::new();
    session.add_entry();
    session.update_field(0, &EntryUpdate::score(ScoreField::Phq9Total, "11"));
    session.update_field(1, &EntryUpdate::score(ScoreField::Gad7Total, "9"));
    session.set_patient_field(PatientField::ProviderName, "Dr Lavoie");

    let outcome = session.request_print(&mut Confirmation::Accept, &mut exporter);

    assert_eq!(outcome, PrintOutcome::Exported);
    assert_eq!(exporter.written().len(), 1);
    let bytes = std::fs::read(&exporter.written()[0]).unwrap();
    assert_eq!(&bytes[..2], b"PK");
    assert!(session.entries().is_empty());
    assert!(session.patient().is_blank());
}

#[test]
fn declined_print_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut exporter = exporter_in(dir.path());
    let mut session = Session::new();

    let outcome = session.request_print(&mut Confirmation::Decline, &mut exporter);

    assert_eq!(outcome, PrintOutcome::Declined);
    assert!(exporter.written().is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert_eq!(session.entries().len(), 1);
}

#[test]
fn unwritable_output_still_clears_session() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();
    let mut exporter = exporter_in(&blocker);

    let mut session = Session::new();
    session.set_patient_field(PatientField::RequestNumber, "TR-1");

    let outcome = session.request_print(&mut Confirmation::Accept, &mut exporter);

    assert!(matches!(outcome, PrintOutcome::ExportFailed(_)));
    assert!(session.entries().is_empty());
    assert!(session.patient().is_blank());
}

#[test]
fn repeated_exports_do_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let mut exporter = exporter_in(dir.path());
    let summary = mhtrack_core::SessionSummary::new(Default::default(), Vec::new());

    exporter.export(&summary).unwrap();
    exporter.export(&summary).unwrap();

    let written = exporter.written();
    assert_eq!(written.len(), 2);
    assert_ne!(written[0], written[1]);
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn exporter_follows_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = TrackerConfig::default();
    config.output_dir = Some(dir.path().join("out"));

    let mut exporter = DocxFileExporter::from_config(&config).unwrap();
    assert_eq!(exporter.output_dir(), dir.path().join("out"));

    let summary = mhtrack_core::SessionSummary::new(Default::default(), Vec::new());
    exporter.export(&summary).unwrap();
    assert!(exporter.written()[0].starts_with(dir.path().join("out")));
}
