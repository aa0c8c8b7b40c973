//! Property checks over seeded random datasets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use kin_knn::{
    Dataset, KnnConfig, Label, classify, euclidean, leave_one_out, leave_one_out_par,
};

fn random_vector(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
}

/// Features bucketed to tenths so distance ties are common.
fn random_dataset(rng: &mut StdRng, n_records: usize, n_attributes: usize) -> Dataset {
    let records: Vec<(Vec<f64>, Label)> = (0..n_records)
        .map(|_| {
            let v = (0..n_attributes)
                .map(|_| f64::from(rng.random_range(0..10u8)) / 10.0)
                .collect();
            (v, Label::new(rng.random_range(1..=3)))
        })
        .collect();
    Dataset::from_records(records, n_attributes, 3).unwrap()
}

#[test]
fn distance_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 0..8 {
        let u = random_vector(&mut rng, n);
        let v = random_vector(&mut rng, n);
        assert_eq!(euclidean(&u, &v).unwrap(), euclidean(&v, &u).unwrap());
    }
}

#[test]
fn distance_to_self_is_zero() {
    let mut rng = StdRng::seed_from_u64(8);
    for n in 0..8 {
        let u = random_vector(&mut rng, n);
        assert_eq!(euclidean(&u, &u).unwrap(), 0.0);
    }
}

#[test]
fn distance_is_non_negative() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        let u = random_vector(&mut rng, 5);
        let v = random_vector(&mut rng, 5);
        assert!(euclidean(&u, &v).unwrap() >= 0.0);
    }
}

#[test]
fn k1_returns_label_of_first_minimum() {
    let mut rng = StdRng::seed_from_u64(42);
    let ds = random_dataset(&mut rng, 60, 3);
    for _ in 0..50 {
        let query: Vec<f64> = (0..3)
            .map(|_| f64::from(rng.random_range(0..10u8)) / 10.0)
            .collect();

        // Brute force: first record at the minimum distance.
        let mut best = 0;
        let mut best_d = f64::INFINITY;
        for (i, record) in ds.records().enumerate() {
            let d = euclidean(record.features, &query).unwrap();
            if d < best_d {
                best = i;
                best_d = d;
            }
        }

        let result = classify(&ds.view(), &query, &KnnConfig::new(1)).unwrap();
        assert_eq!(result.neighbor_indices(), vec![best]);
        assert_eq!(result.label(), ds.labels()[best]);
    }
}

#[test]
fn neighbors_are_sorted_and_tie_broken_by_index() {
    let mut rng = StdRng::seed_from_u64(3);
    let ds = random_dataset(&mut rng, 80, 2);
    for k in [1, 4, 9, 80] {
        let result = classify(&ds.view(), &[0.5, 0.5], &KnnConfig::new(k)).unwrap();
        let n = result.neighbors();
        assert_eq!(n.len(), k);
        for pair in n.windows(2) {
            assert!(
                pair[0].distance < pair[1].distance
                    || (pair[0].distance == pair[1].distance && pair[0].index < pair[1].index),
                "out of order: {pair:?}"
            );
        }
        // Nothing left out is strictly nearer than the farthest selected.
        let farthest = n[n.len() - 1];
        for (i, record) in ds.records().enumerate() {
            if n.iter().any(|x| x.index == i) {
                continue;
            }
            let d = euclidean(record.features, &[0.5, 0.5]).unwrap();
            assert!(d > farthest.distance || (d == farthest.distance && i > farthest.index));
        }
    }
}

#[test]
fn error_rate_within_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in [2, 3, 10, 40] {
        let ds = random_dataset(&mut rng, n, 4);
        for k in [1, 3, 7] {
            let rate = leave_one_out(&ds, &KnnConfig::new(k)).unwrap().error_rate();
            assert!((0.0..=100.0).contains(&rate), "rate {rate} for n={n}, k={k}");
        }
    }
}

#[test]
fn classify_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(5);
    let ds = random_dataset(&mut rng, 50, 5);
    let query = [0.3, 0.3, 0.3, 0.3, 0.3];
    let config = KnnConfig::new(7);
    let first = classify(&ds.view(), &query, &config).unwrap();
    for _ in 0..10 {
        assert_eq!(classify(&ds.view(), &query, &config).unwrap(), first);
    }
}

#[test]
fn validate_is_deterministic_and_matches_parallel() {
    let mut rng = StdRng::seed_from_u64(6);
    let ds = random_dataset(&mut rng, 120, 5);
    let config = KnnConfig::new(7);
    let first = leave_one_out(&ds, &config).unwrap();
    assert_eq!(leave_one_out(&ds, &config).unwrap(), first);
    assert_eq!(leave_one_out_par(&ds, &config).unwrap(), first);
}

#[test]
fn validation_leaves_dataset_untouched() {
    let mut rng = StdRng::seed_from_u64(12);
    let ds = random_dataset(&mut rng, 30, 3);
    let before = ds.clone();
    leave_one_out(&ds, &KnnConfig::new(3)).unwrap();
    leave_one_out_par(&ds, &KnnConfig::new(3)).unwrap();
    assert_eq!(ds, before);
}
