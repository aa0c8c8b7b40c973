//! Configuration for k-NN classification queries.

use crate::error::KnnError;

/// Configuration for a k-NN classification query.
///
/// The only tunable is `k`, the number of neighbors that vote. It is passed
/// explicitly to every call rather than stored on a classifier.
///
/// # Example
///
/// ```
/// use kin_knn::KnnConfig;
///
/// let config = KnnConfig::new(7);
/// assert_eq!(config.k(), 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnnConfig {
    /// Number of nearest neighbors that vote.
    k: usize,
}

impl KnnConfig {
    /// Creates a new configuration with the given k.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Sets the number of neighbors.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Returns the number of nearest neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns k clamped to the number of available records.
    pub fn k_eff(&self, n_records: usize) -> usize {
        self.k.min(n_records)
    }

    /// Validates this configuration.
    ///
    /// Returns [`KnnError::NoNeighbors`] if k is zero.
    pub fn validate(&self) -> Result<(), KnnError> {
        if self.k < 1 {
            return Err(KnnError::NoNeighbors);
        }
        Ok(())
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
