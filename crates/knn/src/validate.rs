//! Leave-one-out cross-validation.

use rayon::prelude::*;
use tracing::debug;

use crate::config::KnnConfig;
use crate::dataset::{Dataset, Label};
use crate::error::KnnError;
use crate::knn::{KnnScratch, classify_inner};

/// Outcome of a leave-one-out pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    /// Predicted label for each record, in record order.
    predictions: Vec<Label>,
    /// Indices of records whose prediction disagreed with their label.
    misclassified: Vec<usize>,
}

impl Validation {
    fn from_predictions(dataset: &Dataset, predictions: Vec<Label>) -> Self {
        let misclassified = predictions
            .iter()
            .zip(dataset.labels())
            .enumerate()
            .filter(|(_, (predicted, actual))| predicted != actual)
            .map(|(i, _)| i)
            .collect();
        Self {
            predictions,
            misclassified,
        }
    }

    /// Number of records validated.
    pub fn n_records(&self) -> usize {
        self.predictions.len()
    }

    /// Number of mispredicted records.
    pub fn n_errors(&self) -> usize {
        self.misclassified.len()
    }

    /// Percentage of mispredicted records, in `[0, 100]`.
    pub fn error_rate(&self) -> f64 {
        100.0 * self.n_errors() as f64 / self.n_records() as f64
    }

    /// Label predicted for each record with that record withheld.
    pub fn predictions(&self) -> &[Label] {
        &self.predictions
    }

    /// Indices of mispredicted records, ascending.
    pub fn misclassified(&self) -> &[usize] {
        &self.misclassified
    }
}

fn check(dataset: &Dataset, config: &KnnConfig) -> Result<(), KnnError> {
    config.validate()?;
    if dataset.n_records() < 2 {
        return Err(KnnError::InsufficientData {
            n_records: dataset.n_records(),
        });
    }
    Ok(())
}

fn predict_withheld(
    dataset: &Dataset,
    index: usize,
    config: &KnnConfig,
    scratch: &mut KnnScratch,
) -> Result<Label, KnnError> {
    // Dataset rows are finite and of the right length, so no per-query checks.
    classify_inner(&dataset.without(index), dataset.row(index), config, scratch)
}

fn finish(dataset: &Dataset, config: &KnnConfig, predictions: Vec<Label>) -> Validation {
    let validation = Validation::from_predictions(dataset, predictions);
    debug!(
        n_records = validation.n_records(),
        k = config.k(),
        n_errors = validation.n_errors(),
        error_rate = validation.error_rate(),
        "leave-one-out validation complete"
    );
    validation
}

/// Estimates the error rate by classifying each record against all the others.
///
/// For each record `i`, the reference is `dataset.without(i)` and the query is
/// record `i`'s own feature vector. The dataset is never modified.
///
/// # Errors
///
/// - [`KnnError::NoNeighbors`] if `config.k()` is zero.
/// - [`KnnError::InsufficientData`] if the dataset has fewer than 2 records.
///
/// ```
/// use kin_knn::{Dataset, KnnConfig, Label, leave_one_out};
///
/// let dataset = Dataset::from_records(
///     [
///         ([0.0, 0.0], Label::new(1)),
///         ([0.0, 1.0], Label::new(1)),
///         ([10.0, 10.0], Label::new(2)),
///         ([10.0, 11.0], Label::new(2)),
///     ],
///     2,
///     2,
/// )
/// .unwrap();
///
/// let validation = leave_one_out(&dataset, &KnnConfig::new(1)).unwrap();
/// assert_eq!(validation.error_rate(), 0.0);
/// ```
pub fn leave_one_out(dataset: &Dataset, config: &KnnConfig) -> Result<Validation, KnnError> {
    check(dataset, config)?;

    let n = dataset.n_records();
    let mut scratch = KnnScratch::new(n);
    let predictions = (0..n)
        .map(|i| predict_withheld(dataset, i, config, &mut scratch))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(finish(dataset, config, predictions))
}

/// Parallel form of [`leave_one_out`].
///
/// Iterations are independent, so they run on the rayon pool with one
/// scratch buffer per worker. Results are identical to the sequential pass.
///
/// # Errors
///
/// Same as [`leave_one_out`].
pub fn leave_one_out_par(dataset: &Dataset, config: &KnnConfig) -> Result<Validation, KnnError> {
    check(dataset, config)?;

    let n = dataset.n_records();
    let predictions = (0..n)
        .into_par_iter()
        .map_init(
            || KnnScratch::new(n),
            |scratch, i| predict_withheld(dataset, i, config, scratch),
        )
        .collect::<Result<Vec<_>, _>>()?;

    Ok(finish(dataset, config, predictions))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[(f64, u32)], n_classes: u32) -> Dataset {
        Dataset::from_records(
            rows.iter().map(|&(x, l)| ([x], Label::new(l))),
            1,
            n_classes,
        )
        .unwrap()
    }

    #[test]
    fn test_separable_has_no_errors() {
        let ds = dataset(&[(0.0, 1), (1.0, 1), (10.0, 2), (11.0, 2)], 2);
        let v = leave_one_out(&ds, &KnnConfig::new(1)).unwrap();
        assert_eq!(v.n_records(), 4);
        assert_eq!(v.n_errors(), 0);
        assert_eq!(v.error_rate(), 0.0);
        assert_eq!(v.predictions(), ds.labels());
        assert!(v.misclassified().is_empty());
    }

    #[test]
    fn test_single_outlier_counts_once() {
        // Record 2 sits next to class 1 but is labelled 2.
        let ds = dataset(&[(0.0, 1), (0.1, 1), (0.3, 2), (10.0, 2), (11.0, 2)], 2);
        let v = leave_one_out(&ds, &KnnConfig::new(1)).unwrap();
        assert_eq!(v.misclassified(), &[2]);
        assert_eq!(v.error_rate(), 20.0);
    }

    #[test]
    fn test_all_wrong() {
        // Alternating labels on a line: each nearest neighbor has the other label.
        let ds = dataset(&[(0.0, 1), (1.0, 2), (2.5, 1), (4.5, 2)], 2);
        let v = leave_one_out(&ds, &KnnConfig::new(1)).unwrap();
        assert_eq!(v.n_errors(), 4);
        assert_eq!(v.error_rate(), 100.0);
    }

    #[test]
    fn test_two_records_minimum() {
        let ds = dataset(&[(0.0, 1), (1.0, 1)], 1);
        let v = leave_one_out(&ds, &KnnConfig::new(5)).unwrap();
        assert_eq!(v.error_rate(), 0.0);
    }

    #[test]
    fn test_insufficient_data() {
        let ds = dataset(&[(0.0, 1)], 1);
        assert_eq!(
            leave_one_out(&ds, &KnnConfig::new(1)).unwrap_err(),
            KnnError::InsufficientData { n_records: 1 }
        );
        let empty = Dataset::new(Vec::new(), Vec::new(), 1, 1).unwrap();
        assert_eq!(
            leave_one_out_par(&empty, &KnnConfig::new(1)).unwrap_err(),
            KnnError::InsufficientData { n_records: 0 }
        );
    }

    #[test]
    fn test_zero_k() {
        let ds = dataset(&[(0.0, 1), (1.0, 1)], 1);
        assert_eq!(
            leave_one_out(&ds, &KnnConfig::new(0)).unwrap_err(),
            KnnError::NoNeighbors
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let rows: Vec<(f64, u32)> = (0..40)
            .map(|i| ((i * 7 % 13) as f64, (i % 3 + 1) as u32))
            .collect();
        let ds = dataset(&rows, 3);
        for k in [1, 3, 5, 39, 100] {
            let config = KnnConfig::new(k);
            assert_eq!(
                leave_one_out(&ds, &config).unwrap(),
                leave_one_out_par(&ds, &config).unwrap(),
                "k = {k}"
            );
        }
    }
}
