//! Error types for kin-applicant.

use kin_io::IoError;
use kin_knn::KnnError;

/// Error type for all fallible operations in the kin-applicant crate.
#[derive(Debug, thiserror::Error)]
pub enum ApplicantError {
    /// Wraps a file or token-level failure from kin-io.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Returned when a training header declares a shape other than applicants'.
    #[error(
        "applicant data has {expected_attributes} attributes and {expected_classes} classes, \
         header declares {n_attributes} and {n_classes}"
    )]
    Shape {
        /// Declared attribute count.
        n_attributes: usize,
        /// Declared class count.
        n_classes: u32,
        /// Attribute count of a normalized applicant.
        expected_attributes: usize,
        /// Number of credit classes.
        expected_classes: u32,
    },

    /// Returned when normalized records violate the dataset invariants.
    #[error("invalid applicant dataset: {0}")]
    Dataset(#[from] KnnError),
}
