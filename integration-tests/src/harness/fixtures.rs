use s3logparse_core::input::{InputSource, read_sources};
use s3logparse_core::report::ReportKind;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Loads a fixture through the same reader the CLI uses.
pub fn fixture_lines(file: &str) -> Vec<String> {
    read_sources(&[InputSource::File(fixture_path(file))]).lines
}

/// Runs a report and returns exactly what would be printed.
pub fn render(kind: ReportKind, lines: &[String]) -> String {
    let mut out = Vec::new();
    kind.run(lines)
        .write_to(&mut out, None)
        .expect("failed to render report");
    String::from_utf8(out).expect("report output is not UTF-8")
}
