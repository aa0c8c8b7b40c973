//! Unlabelled query vectors.

use kin_knn::KnnError;

/// Unlabelled feature vectors stored row-major `[n_queries × n_attributes]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Queries {
    features: Vec<f64>,
    n_attributes: usize,
}

impl Queries {
    /// Builds a query set from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::ShapeMismatch`] if `n_attributes` is zero or does
    /// not divide `features.len()`.
    pub fn new(features: Vec<f64>, n_attributes: usize) -> Result<Self, KnnError> {
        if n_attributes == 0 || !features.len().is_multiple_of(n_attributes) {
            return Err(KnnError::ShapeMismatch {
                len: features.len(),
                n_attributes,
            });
        }
        Ok(Self {
            features,
            n_attributes,
        })
    }

    /// Number of query vectors.
    pub fn len(&self) -> usize {
        self.features.len() / self.n_attributes
    }

    /// Returns `true` if there are no queries.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of attributes per query.
    pub fn n_attributes(&self) -> usize {
        self.n_attributes
    }

    /// Flat row-major feature buffer.
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Iterates over query vectors in order.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.features.chunks_exact(self.n_attributes)
    }
}
