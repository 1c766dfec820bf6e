use crate::input::discover::InputSource;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Every line read from every source, in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputLines {
    pub lines: Vec<String>,
    pub files_read: usize,
    pub files_failed: usize,
}

/// Reads all sources into memory, taking `-` from the process's standard input.
pub fn read_sources(sources: &[InputSource]) -> InputLines {
    read_sources_from(sources, io::stdin().lock())
}

/// Reads all sources into memory, taking `-` from `stdin`.
///
/// A source that cannot be opened or decoded is logged and skipped as a
/// whole, and reading carries on with the next one. Standard input is
/// treated like any other file.
pub fn read_sources_from<R: Read>(sources: &[InputSource], mut stdin: R) -> InputLines {
    let mut input = InputLines::default();

    for source in sources {
        let (name, result) = match source {
            InputSource::Stdin => (String::from("<stdin>"), read_all_lines(&mut stdin)),
            InputSource::File(path) => (path.display().to_string(), read_file(path)),
        };

        match result {
            Ok(lines) => {
                tracing::debug!(path = %name, lines = lines.len(), "read log file");
                input.lines.extend(lines);
                input.files_read += 1;
            }
            Err(e) => {
                tracing::warn!(path = %name, error = %e, "failed to read log file; skipping");
                input.files_failed += 1;
            }
        }
    }

    tracing::info!(
        files_read = input.files_read,
        files_failed = input.files_failed,
        lines = input.lines.len(),
        "log lines loaded"
    );

    input
}

/// The file handle is dropped, and so closed, before this returns.
pub fn read_file(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    read_all_lines(file)
}

/// Reads to the end before splitting so a failure part-way yields no lines.
pub fn read_all_lines<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents.lines().map(str::to_string).collect())
}
