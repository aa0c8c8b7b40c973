//! Writers for numeric dataset, query and result files.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use kin_knn::Dataset;

use crate::error::IoError;
use crate::queries::Queries;

/// Validation outcome appended to a result file by a full run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Leave-one-out error rate in percent.
    pub validation_error: f64,
    /// Number of neighbors used.
    pub k: usize,
}

fn create(path: &Path) -> Result<BufWriter<File>, IoError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| IoError::from_io(path, e))
}

fn write_row(out: &mut impl Write, row: &[f64]) -> std::io::Result<()> {
    for (j, v) in row.iter().enumerate() {
        if j > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{v:?}")?;
    }
    Ok(())
}

/// Writes `dataset` in the `N M C` dataset format.
pub fn format_dataset(out: &mut impl Write, dataset: &Dataset) -> std::io::Result<()> {
    writeln!(
        out,
        "{} {} {}",
        dataset.n_records(),
        dataset.n_attributes(),
        dataset.n_classes()
    )?;
    for record in dataset.records() {
        write_row(out, record.features)?;
        writeln!(out, " {}", record.label)?;
    }
    Ok(())
}

/// Writes `queries` in the `N` query format.
pub fn format_queries(out: &mut impl Write, queries: &Queries) -> std::io::Result<()> {
    writeln!(out, "{}", queries.len())?;
    for row in queries.rows() {
        write_row(out, row)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Writes a dataset file.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created or written.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<(), IoError> {
    let mut out = create(path)?;
    format_dataset(&mut out, dataset)
        .and_then(|()| out.flush())
        .map_err(|e| IoError::from_io(path, e))?;
    debug!(path = %path.display(), n_records = dataset.n_records(), "dataset written");
    Ok(())
}

/// Writes a query file.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created or written.
pub fn write_queries(path: &Path, queries: &Queries) -> Result<(), IoError> {
    let mut out = create(path)?;
    format_queries(&mut out, queries)
        .and_then(|()| out.flush())
        .map_err(|e| IoError::from_io(path, e))?;
    debug!(path = %path.display(), n_queries = queries.len(), "queries written");
    Ok(())
}

/// Writes class names in the `N` result format.
pub fn format_results<S: AsRef<str>>(out: &mut impl Write, names: &[S]) -> std::io::Result<()> {
    writeln!(out, "{}", names.len())?;
    for name in names {
        writeln!(out, "{}", name.as_ref())?;
    }
    Ok(())
}

/// Writes a result file: the count, then one class name per line.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created or written.
pub fn write_results<S: AsRef<str>>(path: &Path, names: &[S]) -> Result<(), IoError> {
    let mut out = create(path)?;
    format_results(&mut out, names)
        .and_then(|()| out.flush())
        .map_err(|e| IoError::from_io(path, e))?;
    debug!(path = %path.display(), n_results = names.len(), "results written");
    Ok(())
}

/// Appends the validation error and k trailer to an existing result file.
///
/// ```text
///
/// Validation Error:  12.50%
/// K-Value: 7
/// ```
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the result file does not exist, or
/// [`IoError::Io`] if it cannot be written.
pub fn append_summary(path: &Path, summary: &RunSummary) -> Result<(), IoError> {
    let mut out = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| IoError::from_io(path, e))?;
    write!(
        out,
        "\nValidation Error:  {:.2}%\nK-Value: {}\n",
        summary.validation_error, summary.k
    )
    .map_err(|e| IoError::from_io(path, e))
}
