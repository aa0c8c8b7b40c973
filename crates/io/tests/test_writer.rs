//! Integration test: writing datasets, queries and results to disk.

use kin_io::{
    IoError, Queries, RunSummary, append_summary, read_dataset, read_queries, write_dataset,
    write_queries, write_results,
};
use kin_knn::{Dataset, Label};

#[test]
fn dataset_written_then_read() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("normalized.txt");
    let ds = Dataset::from_records(
        [
            ([0.125, 0.5, -0.2], Label::new(1)),
            ([1.0, 0.0, 0.6], Label::new(2)),
        ],
        3,
        2,
    )
    .unwrap();

    write_dataset(&path, &ds).expect("write succeeds");
    assert_eq!(read_dataset(&path).expect("read succeeds"), ds);
}

#[test]
fn queries_written_then_read() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("queries.txt");
    let queries = Queries::new(vec![0.1, 0.2, 0.3, 0.4], 2).unwrap();

    write_queries(&path, &queries).expect("write succeeds");
    assert_eq!(read_queries(&path, 2).expect("read succeeds"), queries);
}

#[test]
fn results_with_summary() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("results.txt");

    write_results(&path, &["low", "medium", "high"]).expect("write succeeds");
    append_summary(
        &path,
        &RunSummary {
            validation_error: 100.0 / 3.0,
            k: 7,
        },
    )
    .expect("append succeeds");

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "3\nlow\nmedium\nhigh\n\nValidation Error:  33.33%\nK-Value: 7\n"
    );
}

#[test]
fn append_summary_requires_existing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing.txt");
    let err = append_summary(
        &path,
        &RunSummary {
            validation_error: 0.0,
            k: 1,
        },
    )
    .unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("no_such_dir").join("out.txt");
    let err = write_results(&path, &["low"]).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. } | IoError::Io { .. }));
}
