use crate::input::{DEFAULT_PATTERN, InputError, InputSource, collect_sources, discover, resolve_glob};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn discover_finds_matching_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("a.log"), "").unwrap();
    fs::write(root.join("b.log"), "").unwrap();
    fs::write(root.join("c.txt"), "").unwrap();

    // Act
    let result = discover(root, "*.log").unwrap();

    // Assert
    assert_eq!(result, vec![root.join("a.log"), root.join("b.log")]);
}

#[test]
fn discover_returns_sorted_paths() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("2019-02-07"), "").unwrap();
    fs::write(root.join("2019-02-05"), "").unwrap();
    fs::write(root.join("2019-02-06"), "").unwrap();

    // Act
    let result = discover(root, DEFAULT_PATTERN).unwrap();

    // Assert
    assert_eq!(
        result,
        vec![
            root.join("2019-02-05"),
            root.join("2019-02-06"),
            root.join("2019-02-07"),
        ]
    );
}

#[test]
fn discover_walks_nested_directories_and_skips_them() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("nested/inner")).unwrap();
    fs::write(root.join("root.log"), "").unwrap();
    fs::write(root.join("nested/a.log"), "").unwrap();
    fs::write(root.join("nested/inner/b.log"), "").unwrap();

    // Act
    let result = discover(root, DEFAULT_PATTERN).unwrap();

    // Assert
    assert_eq!(
        result,
        vec![
            root.join("nested/a.log"),
            root.join("nested/inner/b.log"),
            root.join("root.log"),
        ]
    );
}

#[test]
fn discover_returns_empty_vec_when_no_matches() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();

    let result = discover(dir.path(), "*.log").unwrap();

    assert!(result.is_empty());
}

#[test]
fn discover_returns_error_for_invalid_glob() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let err = discover(dir.path(), "[").unwrap_err();

    // Assert
    let InputError::Glob { pattern, .. } = &err;
    assert!(pattern.contains('['));
    assert_eq!(err.to_string(), format!("glob pattern error: {pattern}"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn resolve_glob_joins_root_and_pattern() {
    assert_eq!(
        resolve_glob(Path::new("/var/log/s3"), "**/*.log"),
        "/var/log/s3/**/*.log"
    );
}

#[test]
fn collect_sources_keeps_argument_order() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("logs")).unwrap();
    fs::write(root.join("logs/b"), "").unwrap();
    fs::write(root.join("logs/a"), "").unwrap();
    fs::write(root.join("single.log"), "").unwrap();

    let args = vec![
        root.join("single.log"),
        PathBuf::from("-"),
        root.join("logs"),
        root.join("missing.log"),
    ];

    // Act
    let sources = collect_sources(&args, DEFAULT_PATTERN).unwrap();

    // Assert
    assert_eq!(
        sources,
        vec![
            InputSource::File(root.join("single.log")),
            InputSource::Stdin,
            InputSource::File(root.join("logs/a")),
            InputSource::File(root.join("logs/b")),
            InputSource::File(root.join("missing.log")),
        ]
    );
}
