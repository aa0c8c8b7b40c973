//! Error types for the kin-knn crate.

/// Error type for all fallible operations in the kin-knn crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when a vector's length disagrees with the attribute count.
    #[error("vector length {got} does not match attribute count {expected}")]
    DimensionMismatch {
        /// Declared attribute count.
        expected: usize,
        /// Length of the offending vector.
        got: usize,
    },

    /// Returned when a label falls outside `1..=n_classes`.
    #[error("label {label} is outside 1..={n_classes}")]
    InvalidLabel {
        /// The offending label value.
        label: u32,
        /// Declared class count.
        n_classes: u32,
    },

    /// Returned when classifying against a reference with no records.
    #[error("reference dataset has no records")]
    EmptyDataset,

    /// Returned when leave-one-out validation gets fewer than two records.
    #[error("leave-one-out validation needs at least 2 records, got {n_records}")]
    InsufficientData {
        /// Number of records available.
        n_records: usize,
    },

    /// Returned when k is zero, leaving nothing to vote on.
    #[error("no neighbors to vote on (k must be >= 1)")]
    NoNeighbors,

    /// Returned when a feature buffer cannot be split into rows.
    #[error("feature buffer of length {len} does not hold whole rows of {n_attributes}")]
    ShapeMismatch {
        /// Length of the flat feature buffer.
        len: usize,
        /// Declared attribute count.
        n_attributes: usize,
    },

    /// Returned when the number of labels differs from the number of rows.
    #[error("{labels} labels given for {rows} feature rows")]
    LabelCountMismatch {
        /// Number of feature rows.
        rows: usize,
        /// Number of labels.
        labels: usize,
    },

    /// Returned when a required input contains NaN or infinity.
    #[error("non-finite value in {input}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        input: &'static str,
    },
}
