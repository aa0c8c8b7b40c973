//! Readers for numeric dataset and query files.
//!
//! ```text
//! dataset:  N M C                      query:  N
//!           <M reals> <label>   × N            <M reals>   × N
//! ```

use std::path::Path;

use tracing::{debug, warn};

use kin_knn::{Dataset, Label};

use crate::error::IoError;
use crate::queries::Queries;
use crate::tokens::TokenReader;

/// Reads a whole file into memory, mapping a missing file to [`IoError::FileNotFound`].
pub(crate) fn read_file(path: &Path) -> Result<String, IoError> {
    std::fs::read_to_string(path).map_err(|e| IoError::from_io(path, e))
}

/// Warns when tokens remain after the declared records.
pub fn warn_trailing(tokens: &mut TokenReader<'_>, what: &str) {
    if let Some(line) = tokens.peek_line() {
        warn!(line, "ignoring trailing tokens after {what}");
    }
}

/// Parses the `N M C` header of a dataset file.
///
/// # Errors
///
/// Returns [`IoError::UnexpectedEof`] or [`IoError::Parse`] for a missing or
/// malformed count, and [`IoError::InvalidHeader`] if `M` or `C` is zero or
/// `N × M` overflows.
pub fn parse_dataset_header(tokens: &mut TokenReader<'_>) -> Result<(usize, usize, u32), IoError> {
    let line = tokens.peek_line().unwrap_or_default();
    let n_records = tokens.next_parsed("record count")?;
    let n_attributes = positive(tokens, "attribute count", "attribute count must be at least 1")?;
    let n_classes = positive(tokens, "class count", "class count must be at least 1")?;
    checked_len(n_records, n_attributes, line)?;
    Ok((n_records, n_attributes, n_classes))
}

/// Number of feature values in `n_rows` rows, or [`IoError::InvalidHeader`]
/// if that overflows `usize`.
fn checked_len(n_rows: usize, n_attributes: usize, line: usize) -> Result<usize, IoError> {
    n_rows
        .checked_mul(n_attributes)
        .ok_or(IoError::InvalidHeader {
            line,
            reason: "declared size overflows",
        })
}

/// Capacity to reserve for a buffer whose length comes from a file header.
///
/// Headers are untrusted, so larger buffers grow as records are actually read.
pub fn header_capacity(declared: usize) -> usize {
    const MAX_RESERVE: usize = 1 << 16;
    declared.min(MAX_RESERVE)
}

fn positive<T>(
    tokens: &mut TokenReader<'_>,
    expected: &'static str,
    reason: &'static str,
) -> Result<T, IoError>
where
    T: std::str::FromStr + Default + PartialEq,
{
    let line = tokens.peek_line().unwrap_or_default();
    let value: T = tokens.next_parsed(expected)?;
    if value == T::default() {
        return Err(IoError::InvalidHeader { line, reason });
    }
    Ok(value)
}

/// Parses a dataset from its text form.
///
/// # Errors
///
/// Returns [`IoError::UnexpectedEof`] or [`IoError::Parse`] for malformed
/// input, and [`IoError::Dataset`] if the records violate the dataset
/// invariants (e.g. a label outside `1..=C`).
pub fn parse_dataset(input: &str) -> Result<Dataset, IoError> {
    let mut tokens = TokenReader::new(input);
    let (n_records, n_attributes, n_classes) = parse_dataset_header(&mut tokens)?;

    let mut features = Vec::with_capacity(header_capacity(n_records * n_attributes));
    let mut labels = Vec::with_capacity(header_capacity(n_records));
    for _ in 0..n_records {
        for _ in 0..n_attributes {
            features.push(tokens.next_parsed::<f64>("attribute value")?);
        }
        labels.push(Label::new(tokens.next_parsed("class label")?));
    }
    warn_trailing(&mut tokens, "dataset records");

    Ok(Dataset::new(features, labels, n_attributes, n_classes)?)
}

/// Reads a dataset file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Io`] if the file cannot
/// be read, otherwise the errors of [`parse_dataset`].
pub fn read_dataset(path: &Path) -> Result<Dataset, IoError> {
    let dataset = parse_dataset(&read_file(path)?)?;
    debug!(
        path = %path.display(),
        n_records = dataset.n_records(),
        n_attributes = dataset.n_attributes(),
        n_classes = dataset.n_classes(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Parses a query set from its text form.
///
/// The file does not declare its attribute count; `n_attributes` comes from
/// the dataset the queries will be classified against.
///
/// # Errors
///
/// Returns [`IoError::UnexpectedEof`] or [`IoError::Parse`] for malformed
/// input, [`IoError::InvalidHeader`] if the query count times
/// `n_attributes` overflows, and [`IoError::Dataset`] if `n_attributes` is
/// zero.
pub fn parse_queries(input: &str, n_attributes: usize) -> Result<Queries, IoError> {
    let mut tokens = TokenReader::new(input);
    let line = tokens.peek_line().unwrap_or_default();
    let n_queries: usize = tokens.next_parsed("query count")?;
    let n_values = checked_len(n_queries, n_attributes, line)?;

    let mut features = Vec::with_capacity(header_capacity(n_values));
    for _ in 0..n_values {
        features.push(tokens.next_parsed::<f64>("attribute value")?);
    }
    warn_trailing(&mut tokens, "query records");

    Ok(Queries::new(features, n_attributes)?)
}

/// Reads a query file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Io`] if the file cannot
/// be read, otherwise the errors of [`parse_queries`].
pub fn read_queries(path: &Path, n_attributes: usize) -> Result<Queries, IoError> {
    let queries = parse_queries(&read_file(path)?, n_attributes)?;
    debug!(path = %path.display(), n_queries = queries.len(), "queries loaded");
    Ok(queries)
}
