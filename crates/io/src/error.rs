//! Error types for kin-io.

use std::path::PathBuf;

use kin_knn::KnnError;

/// Error type for all fallible operations in the kin-io crate.
///
/// Covers missing files, OS-level I/O failures, malformed token streams, and
/// datasets that parse but violate the dataset invariants.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an OS-level read or write failure.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when the input ends before a required token.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// Description of the missing token.
        expected: &'static str,
    },

    /// Returned when a token cannot be parsed as the expected type.
    #[error("line {line}: cannot parse '{token}' as {expected}")]
    Parse {
        /// 1-based line number of the token.
        line: usize,
        /// The offending token.
        token: String,
        /// Description of the expected token.
        expected: &'static str,
    },

    /// Returned when a header count is well-formed but unusable.
    #[error("line {line}: invalid header: {reason}")]
    InvalidHeader {
        /// 1-based line number of the offending count.
        line: usize,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Returned when parsed records violate the dataset invariants.
    #[error("invalid dataset: {0}")]
    Dataset(#[from] KnnError),
}

impl IoError {
    /// Wraps a `std::io::Error` for `path`, mapping `NotFound` to [`IoError::FileNotFound`].
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
