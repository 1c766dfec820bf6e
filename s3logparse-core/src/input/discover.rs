use crate::input::error::InputError;
use glob::glob;
use std::path::{Path, PathBuf};

/// Glob applied inside directories when nothing else is configured.
pub const DEFAULT_PATTERN: &str = "**/*";

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Where a batch of raw lines comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Finds the regular files under `root` matching `glob_pattern`, sorted.
///
/// Entries the glob cannot read are dropped, as are directories.
///
/// # Errors
///
/// Returns `InputError::Glob` if the pattern is malformed.
pub fn discover(root: &Path, glob_pattern: &str) -> Result<Vec<PathBuf>, InputError> {
    let pattern = &resolve_glob(root, glob_pattern);
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| InputError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Joins `pattern` onto `root`.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    root.join(pattern).to_string_lossy().into_owned()
}

/// Expands command-line paths into input sources, keeping argument order.
///
/// Directories are replaced by the files `discover` finds in them. Anything
/// else is passed through as a file, including paths that do not exist: those
/// are reported when reading fails.
pub fn collect_sources(paths: &[PathBuf], glob_pattern: &str) -> Result<Vec<InputSource>, InputError> {
    let mut sources = Vec::new();

    for path in paths {
        if path.as_os_str() == STDIN_PATH {
            sources.push(InputSource::Stdin);
        } else if path.is_dir() {
            let found = discover(path, glob_pattern)?;
            tracing::debug!(dir = %path.display(), files = found.len(), "expanded directory");
            sources.extend(found.into_iter().map(InputSource::File));
        } else {
            sources.push(InputSource::File(path.clone()));
        }
    }

    Ok(sources)
}
