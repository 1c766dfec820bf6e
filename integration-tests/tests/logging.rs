use integration_tests::harness::{CapturedEvent, fixture_path, init_test_tracing};
use pretty_assertions::assert_eq;
use s3logparse_core::input::{InputSource, read_sources};
use s3logparse_core::report::ReportKind;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[test]
fn unreadable_file_is_warned_about_and_reading_continues() {
    // Arrange
    let events: Arc<Mutex<Vec<CapturedEvent>>> = Arc::new(Mutex::new(Vec::new()));
    init_test_tracing(events.clone());
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.log");

    // Act
    let input = read_sources(&[
        InputSource::File(missing.clone()),
        InputSource::File(fixture_path("test.log")),
    ]);
    let report = ReportKind::UserAgent.run(&input.lines);

    // Assert
    assert_eq!(input.files_failed, 1);
    assert_eq!(input.lines.len(), 5);
    assert_eq!(report.entries.len(), 1);

    let events = events.lock().unwrap();
    let warning = events
        .iter()
        .find(|e| e.level == Level::WARN)
        .expect("no warning recorded");
    assert_eq!(
        warning.field("message"),
        Some("failed to read log file; skipping")
    );
    assert_eq!(warning.field("path"), Some(missing.display().to_string().as_str()));

    let computed = events
        .iter()
        .find(|e| e.field("message") == Some("report computed"))
        .expect("no report summary recorded");
    assert_eq!(computed.field("report"), Some("useragent"));
    assert_eq!(computed.field("skipped"), Some("0"));
}
