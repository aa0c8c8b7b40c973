//! # kin-io
//!
//! Read and write the whitespace-delimited text formats used by kin:
//! labelled datasets (`N M C` header), unlabelled query sets (`N` header),
//! and classification results (`N` header, one class name per line).
//! Bridges files into [`kin_knn::Dataset`] and the flat `&[f64]` query rows
//! the classifier consumes.

mod error;
mod queries;
mod reader;
mod tokens;
mod writer;

pub use error::IoError;
pub use queries::Queries;
pub use reader::{
    header_capacity, parse_dataset, parse_dataset_header, parse_queries, read_dataset,
    read_queries, warn_trailing,
};
pub use tokens::TokenReader;
pub use writer::{
    RunSummary, append_summary, format_dataset, format_queries, format_results, write_dataset,
    write_queries, write_results,
};

/// Reads a whole file into memory.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Io`] for any other read failure.
pub fn read_text(path: &std::path::Path) -> Result<String, IoError> {
    reader::read_file(path)
}
