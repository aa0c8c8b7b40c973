//! Integration tests for KnnScratch reuse.

use kin_knn::{Dataset, KnnConfig, KnnScratch, Label, classify, classify_with_scratch};

fn line(n: usize) -> Dataset {
    Dataset::from_records(
        (0..n).map(|i| ([i as f64], Label::new((i % 2 + 1) as u32))),
        1,
        2,
    )
    .unwrap()
}

/// Scratch version produces identical results to non-scratch.
#[test]
fn scratch_matches_non_scratch() {
    let ds = line(30);
    let config = KnnConfig::new(5);
    let mut scratch = KnnScratch::new(30);
    for q in 0..30 {
        let query = [q as f64 + 0.25];
        let a = classify(&ds.view(), &query, &config).unwrap();
        let b = classify_with_scratch(&ds.view(), &query, &config, &mut scratch).unwrap();
        assert_eq!(a, b);
    }
}

/// Scratch works after large -> small reference transitions.
#[test]
fn scratch_large_then_small() {
    let mut scratch = KnnScratch::new(5);
    let config = KnnConfig::new(3);

    let large = line(200);
    let r1 = classify_with_scratch(&large.view(), &[100.0], &config, &mut scratch).unwrap();
    assert_eq!(r1.neighbor_indices(), vec![100, 99, 101]);

    let small = line(2);
    let r2 = classify_with_scratch(&small.view(), &[0.0], &config, &mut scratch).unwrap();
    assert_eq!(r2.neighbor_indices(), vec![0, 1]);
}

/// Scratch reused across views with different withheld records.
#[test]
fn scratch_across_views() {
    let ds = line(10);
    let config = KnnConfig::new(1);
    let mut scratch = KnnScratch::default();
    for i in 0..10 {
        let result =
            classify_with_scratch(&ds.without(i), ds.row(i), &config, &mut scratch).unwrap();
        assert!(!result.neighbor_indices().contains(&i));
    }
}
