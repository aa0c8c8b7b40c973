//! Labelled reference data and read-only views over it.

use std::fmt;

use crate::error::KnnError;

/// Class identifier in `1..=n_classes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(u32);

impl Label {
    /// Creates a label from its numeric class id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric class id.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Zero-based tally slot, or `None` when the label is outside `1..=n_classes`.
    pub(crate) fn slot(self, n_classes: u32) -> Option<usize> {
        (1..=n_classes)
            .contains(&self.0)
            .then(|| (self.0 - 1) as usize)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One labelled feature vector borrowed from a [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    /// Feature vector of length `n_attributes`.
    pub features: &'a [f64],
    /// Class of the record.
    pub label: Label,
}

/// Immutable labelled reference data.
///
/// Feature vectors are stored row-major in one flat buffer
/// `[n_records × n_attributes]`. Every row has exactly `n_attributes` finite
/// values and every label lies in `1..=n_classes`; [`Dataset::new`] enforces
/// both, so downstream code never re-checks them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Vec<f64>,
    labels: Vec<Label>,
    n_attributes: usize,
    n_classes: u32,
}

impl Dataset {
    /// Builds a dataset from a flat row-major feature buffer and one label per row.
    ///
    /// # Errors
    ///
    /// - [`KnnError::ShapeMismatch`] if `n_attributes` is zero or does not
    ///   divide `features.len()`.
    /// - [`KnnError::LabelCountMismatch`] if the row count differs from `labels.len()`.
    /// - [`KnnError::NonFiniteInput`] if any feature is NaN or infinite.
    /// - [`KnnError::InvalidLabel`] if any label is outside `1..=n_classes`.
    pub fn new(
        features: Vec<f64>,
        labels: Vec<Label>,
        n_attributes: usize,
        n_classes: u32,
    ) -> Result<Self, KnnError> {
        if n_attributes == 0 || !features.len().is_multiple_of(n_attributes) {
            return Err(KnnError::ShapeMismatch {
                len: features.len(),
                n_attributes,
            });
        }
        let rows = features.len() / n_attributes;
        if rows != labels.len() {
            return Err(KnnError::LabelCountMismatch {
                rows,
                labels: labels.len(),
            });
        }
        if features.iter().any(|v| !v.is_finite()) {
            return Err(KnnError::NonFiniteInput { input: "features" });
        }
        if let Some(bad) = labels.iter().find(|l| l.slot(n_classes).is_none()) {
            return Err(KnnError::InvalidLabel {
                label: bad.get(),
                n_classes,
            });
        }

        Ok(Self {
            features,
            labels,
            n_attributes,
            n_classes,
        })
    }

    /// Builds a dataset from `(features, label)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::DimensionMismatch`] for the first vector whose
    /// length is not `n_attributes`, otherwise the same errors as [`Dataset::new`].
    pub fn from_records<I, V>(
        records: I,
        n_attributes: usize,
        n_classes: u32,
    ) -> Result<Self, KnnError>
    where
        I: IntoIterator<Item = (V, Label)>,
        V: AsRef<[f64]>,
    {
        let mut features = Vec::new();
        let mut labels = Vec::new();
        for (vector, label) in records {
            let vector = vector.as_ref();
            if vector.len() != n_attributes {
                return Err(KnnError::DimensionMismatch {
                    expected: n_attributes,
                    got: vector.len(),
                });
            }
            features.extend_from_slice(vector);
            labels.push(label);
        }
        Self::new(features, labels, n_attributes, n_classes)
    }

    /// Number of records.
    pub fn n_records(&self) -> usize {
        self.labels.len()
    }

    /// Number of attributes per feature vector.
    pub fn n_attributes(&self) -> usize {
        self.n_attributes
    }

    /// Number of classes.
    pub fn n_classes(&self) -> u32 {
        self.n_classes
    }

    /// Returns `true` if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Flat row-major feature buffer.
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Labels in record order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Feature vector of record `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_records()`.
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.n_attributes;
        &self.features[start..start + self.n_attributes]
    }

    /// Record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_records()`.
    pub fn record(&self, index: usize) -> Record<'_> {
        Record {
            features: self.row(index),
            label: self.labels[index],
        }
    }

    /// Iterates over all records in order.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> + '_ {
        self.features
            .chunks_exact(self.n_attributes)
            .zip(self.labels.iter().copied())
            .map(|(features, label)| Record { features, label })
    }

    /// A view over every record.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView {
            dataset: self,
            withheld: None,
        }
    }

    /// A view over every record except `index`, keeping the remaining order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_records()`.
    pub fn without(&self, index: usize) -> DatasetView<'_> {
        assert!(
            index < self.n_records(),
            "withheld index {index} out of range for {} records",
            self.n_records()
        );
        DatasetView {
            dataset: self,
            withheld: Some(index),
        }
    }
}

/// Read-only reference set over a [`Dataset`], optionally withholding one record.
///
/// Record indices reported through a view always refer to the underlying
/// dataset, so a neighbor found in `dataset.without(3)` at index 4 is
/// `dataset.record(4)`.
#[derive(Debug, Clone, Copy)]
pub struct DatasetView<'a> {
    dataset: &'a Dataset,
    withheld: Option<usize>,
}

impl<'a> DatasetView<'a> {
    /// The underlying dataset.
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// The withheld record index, if any.
    pub fn withheld(&self) -> Option<usize> {
        self.withheld
    }

    /// Number of records visible through this view.
    pub fn len(&self) -> usize {
        self.dataset.n_records() - usize::from(self.withheld.is_some())
    }

    /// Returns `true` if no records are visible.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of attributes per feature vector.
    pub fn n_attributes(&self) -> usize {
        self.dataset.n_attributes()
    }

    /// Number of classes.
    pub fn n_classes(&self) -> u32 {
        self.dataset.n_classes()
    }

    /// Iterates over visible records with their dataset indices.
    pub fn records(&self) -> impl Iterator<Item = (usize, Record<'a>)> + 'a {
        let withheld = self.withheld;
        self.dataset
            .records()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != withheld)
    }
}
