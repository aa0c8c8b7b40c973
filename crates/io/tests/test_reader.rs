//! Integration test: reading dataset and query files from disk.

use std::path::Path;

use kin_io::{IoError, read_dataset, read_queries};
use kin_knn::Label;

#[test]
fn read_dataset_file_not_found() {
    let path = Path::new("/tmp/kin_test_nonexistent_dataset.txt");
    let err = read_dataset(path).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn read_queries_file_not_found() {
    let path = Path::new("/tmp/kin_test_nonexistent_queries.txt");
    let err = read_queries(path, 5).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}

#[test]
fn read_dataset_from_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("training.txt");
    std::fs::write(
        &path,
        "4 5 3\n\
         0.25 0.5 0.2 1.0 1.0 3\n\
         -0.1 0.0 0.4 0.0 0.5 1\n\
         0.5 1.0 0.0 1.0 0.0 2\n\
         0.75 0.25 0.8 0.0 1.0 3\n",
    )
    .expect("write fixture");

    let ds = read_dataset(&path).expect("read succeeds");
    assert_eq!(ds.n_records(), 4);
    assert_eq!(ds.n_attributes(), 5);
    assert_eq!(ds.n_classes(), 3);
    assert_eq!(ds.row(1), &[-0.1, 0.0, 0.4, 0.0, 0.5]);
    assert_eq!(ds.labels()[3], Label::new(3));
}

#[test]
fn read_queries_from_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("test.txt");
    std::fs::write(&path, "2\n0.1 0.2 0.3 1.0 0.5 \n0.4 0.5 0.6 0.0 0.0 \n").expect("write fixture");

    let queries = read_queries(&path, 5).expect("read succeeds");
    assert_eq!(queries.len(), 2);
    assert_eq!(queries.rows().next().unwrap(), &[0.1, 0.2, 0.3, 1.0, 0.5]);
}

#[test]
fn read_dataset_reports_parse_line() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "2 1 2\n0.5 1\nabc 2\n").expect("write fixture");

    let err = read_dataset(&path).unwrap_err();
    assert!(
        matches!(err, IoError::Parse { line: 3, .. }),
        "expected Parse on line 3, got {err:?}"
    );
}
