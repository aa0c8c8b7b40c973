//! k-NN classification entry points and scratch buffer management.

use crate::config::KnnConfig;
use crate::dataset::{DatasetView, Label};
use crate::distance::euclidean_distances;
use crate::error::KnnError;
use crate::result::{Classification, Neighbor};
use crate::select::select_k_nearest;
use crate::vote::vote_with_tally;

/// Pre-allocated scratch buffers for k-NN classification.
///
/// Reuse across calls to [`classify_with_scratch`] to avoid a heap
/// allocation per query (e.g. the N queries of a leave-one-out pass).
///
/// # Example
///
/// ```
/// use kin_knn::KnnScratch;
///
/// let mut scratch = KnnScratch::new(200);
/// // Use with classify_with_scratch() in a loop...
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnnScratch {
    /// (index, distance) candidates, truncated to the k nearest after selection.
    pub(crate) neighbors: Vec<Neighbor>,
    /// Vote counts per distinct neighbor label.
    pub(crate) tally: Vec<(Label, usize)>,
}

impl KnnScratch {
    /// Creates a new scratch buffer with capacity for `max_records` reference records.
    pub fn new(max_records: usize) -> Self {
        Self {
            neighbors: Vec::with_capacity(max_records),
            tally: Vec::new(),
        }
    }
}

/// Validates a query against its reference view.
fn validate_inputs(
    reference: &DatasetView<'_>,
    query: &[f64],
    config: &KnnConfig,
) -> Result<(), KnnError> {
    config.validate()?;

    if reference.is_empty() {
        return Err(KnnError::EmptyDataset);
    }
    if query.len() != reference.n_attributes() {
        return Err(KnnError::DimensionMismatch {
            expected: reference.n_attributes(),
            got: query.len(),
        });
    }
    if query.iter().any(|v| !v.is_finite()) {
        return Err(KnnError::NonFiniteInput { input: "query" });
    }
    Ok(())
}

/// Internal implementation that assumes all inputs are validated.
///
/// Leaves the selected neighbors in `scratch.neighbors`.
pub(crate) fn classify_inner(
    reference: &DatasetView<'_>,
    query: &[f64],
    config: &KnnConfig,
    scratch: &mut KnnScratch,
) -> Result<Label, KnnError> {
    let dataset = reference.dataset();

    // Every visible record, including the last one, is a candidate.
    euclidean_distances(
        dataset.features(),
        dataset.n_attributes(),
        query,
        reference.withheld(),
        &mut scratch.neighbors,
    );

    let k_eff = config.k_eff(scratch.neighbors.len());
    select_k_nearest(&mut scratch.neighbors, k_eff);

    let labels = dataset.labels();
    vote_with_tally(
        scratch.neighbors.iter().map(|n| labels[n.index]),
        dataset.n_classes(),
        &mut scratch.tally,
    )
}

/// Classifies `query` by majority vote of its k nearest records in `reference`.
///
/// If k exceeds the number of visible records, every record votes.
///
/// # Errors
///
/// - [`KnnError::NoNeighbors`] if `config.k()` is zero.
/// - [`KnnError::EmptyDataset`] if `reference` has no visible records.
/// - [`KnnError::DimensionMismatch`] if `query.len()` differs from the attribute count.
/// - [`KnnError::NonFiniteInput`] if `query` contains NaN or infinity.
///
/// ```
/// use kin_knn::{Dataset, KnnConfig, Label, classify};
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
/// let result = classify(&dataset.view(), &[0.0, 0.5], &KnnConfig::new(3)).unwrap();
/// assert_eq!(result.label(), Label::new(1));
/// ```
pub fn classify(
    reference: &DatasetView<'_>,
    query: &[f64],
    config: &KnnConfig,
) -> Result<Classification, KnnError> {
    let mut scratch = KnnScratch::new(reference.len());
    classify_with_scratch(reference, query, config, &mut scratch)
}

/// Classifies `query`, reusing pre-allocated scratch buffers.
///
/// Identical to [`classify`] but avoids per-call allocation of the distance
/// buffer and vote tally.
///
/// # Errors
///
/// Same as [`classify`].
pub fn classify_with_scratch(
    reference: &DatasetView<'_>,
    query: &[f64],
    config: &KnnConfig,
    scratch: &mut KnnScratch,
) -> Result<Classification, KnnError> {
    validate_inputs(reference, query, config)?;
    let label = classify_inner(reference, query, config, scratch)?;
    Ok(Classification::new(label, scratch.neighbors.clone()))
}

/// A reference view paired with a fixed configuration.
///
/// Holds no mutable state; every call to [`Classifier::classify`] is
/// independent.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    reference: DatasetView<'a>,
    config: KnnConfig,
}

impl<'a> Classifier<'a> {
    /// Creates a classifier over `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::NoNeighbors`] if k is zero or
    /// [`KnnError::EmptyDataset`] if `reference` has no visible records.
    pub fn new(reference: DatasetView<'a>, config: KnnConfig) -> Result<Self, KnnError> {
        config.validate()?;
        if reference.is_empty() {
            return Err(KnnError::EmptyDataset);
        }
        Ok(Self { reference, config })
    }

    /// The reference view.
    pub fn reference(&self) -> &DatasetView<'a> {
        &self.reference
    }

    /// The configuration.
    pub fn config(&self) -> &KnnConfig {
        &self.config
    }

    /// Returns the label voted for `query`.
    ///
    /// # Errors
    ///
    /// Same as [`classify`].
    pub fn classify(&self, query: &[f64]) -> Result<Label, KnnError> {
        classify(&self.reference, query, &self.config).map(|c| c.label())
    }

    /// Classifies every query in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Same as [`classify`].
    pub fn classify_batch<I, Q>(&self, queries: I) -> Result<Vec<Label>, KnnError>
    where
        I: IntoIterator<Item = Q>,
        Q: AsRef<[f64]>,
    {
        let mut scratch = KnnScratch::new(self.reference.len());
        queries
            .into_iter()
            .map(|q| {
                let query = q.as_ref();
                validate_inputs(&self.reference, query, &self.config)?;
                classify_inner(&self.reference, query, &self.config, &mut scratch)
            })
            .collect()
    }
}
