//! Edge case integration tests.

use kin_knn::{Dataset, KnnConfig, Label, Neighbor, classify, leave_one_out, select_nearest};

fn line(rows: &[(f64, u32)], n_classes: u32) -> Dataset {
    Dataset::from_records(
        rows.iter().map(|&(x, l)| ([x], Label::new(l))),
        1,
        n_classes,
    )
    .unwrap()
}

/// Single reference record: always its label.
#[test]
fn single_record_reference() {
    let ds = line(&[(3.0, 2)], 2);
    let result = classify(&ds.view(), &[-100.0], &KnnConfig::new(10)).unwrap();
    assert_eq!(result.label(), Label::new(2));
    assert_eq!(result.neighbors().len(), 1);
}

/// k > N: every record votes.
#[test]
fn k_greater_than_n() {
    let ds = line(&[(0.0, 1), (1.0, 2), (2.0, 2)], 2);
    let result = classify(&ds.view(), &[0.0], &KnnConfig::new(50)).unwrap();
    assert_eq!(result.neighbors().len(), 3);
    assert_eq!(result.label(), Label::new(2));
}

/// Leave-one-out with k = N - 1: every other record votes.
#[test]
fn leave_one_out_with_k_n_minus_one() {
    let ds = line(&[(0.0, 1), (1.0, 1), (2.0, 1), (3.0, 2)], 2);
    let validation = leave_one_out(&ds, &KnnConfig::new(3)).unwrap();
    // Every reference set is majority class 1.
    assert_eq!(validation.predictions(), &[Label::new(1); 4]);
    assert_eq!(validation.misclassified(), &[3]);
}

/// Identical feature vectors: distance ties resolve by index.
#[test]
fn identical_records() {
    let ds = line(&[(5.0, 3), (5.0, 1), (5.0, 2), (5.0, 1)], 3);
    let result = classify(&ds.view(), &[5.0], &KnnConfig::new(3)).unwrap();
    assert_eq!(result.neighbor_indices(), vec![0, 1, 2]);
    // One vote each: lowest class wins.
    assert_eq!(result.label(), Label::new(1));
    for n in result.neighbors() {
        assert!(n.distance.abs() < 1e-12);
    }
}

/// Query equal to a record: that record is nearest at distance zero.
#[test]
fn query_equals_record() {
    let ds = line(&[(1.0, 1), (2.0, 2), (3.0, 1)], 2);
    let result = classify(&ds.view(), &[2.0], &KnnConfig::new(1)).unwrap();
    assert_eq!(result.neighbor_indices(), vec![1]);
    assert_eq!(result.neighbors()[0].distance, 0.0);
}

/// Classes with no members still count, so a single higher class can win.
#[test]
fn unused_classes() {
    let ds = line(&[(0.0, 5), (1.0, 5)], 5);
    let result = classify(&ds.view(), &[0.0], &KnnConfig::new(2)).unwrap();
    assert_eq!(result.label(), Label::new(5));
}

/// Many attributes.
#[test]
fn high_dimensional() {
    let n_attr = 12;
    let mut records = Vec::new();
    for i in 0..20 {
        let v: Vec<f64> = (0..n_attr).map(|j| (i * n_attr + j) as f64).collect();
        records.push((v, Label::new(if i < 10 { 1 } else { 2 })));
    }
    let ds = Dataset::from_records(records, n_attr, 2).unwrap();
    let query: Vec<f64> = (0..n_attr).map(|j| (15 * n_attr + j) as f64).collect();
    let result = classify(&ds.view(), &query, &KnnConfig::new(5)).unwrap();
    assert_eq!(result.label(), Label::new(2));
    assert_eq!(result.neighbor_indices()[0], 15);
}

/// Public selector with candidates already filtered by the caller.
#[test]
fn select_nearest_sparse_indices() {
    let candidates = vec![
        Neighbor::new(10, 0.3),
        Neighbor::new(4, 0.3),
        Neighbor::new(7, 0.1),
    ];
    let nearest = select_nearest(candidates, 2);
    assert_eq!(nearest, vec![Neighbor::new(7, 0.1), Neighbor::new(4, 0.3)]);
}
