//! Raw applicant files to numeric datasets and query sets.
//!
//! ```text
//! training:  N M C                                        test:  N
//!            <score> <income> <age> <sex> <status> <class>        <score> <income> <age> <sex> <status>
//! ```

use std::path::Path;

use tracing::debug;

use kin_io::{
    Queries, TokenReader, header_capacity, parse_dataset_header, read_text, warn_trailing,
};
use kin_knn::Dataset;

use crate::applicant::{Applicant, N_ATTRIBUTES};
use crate::category::CreditClass;
use crate::error::ApplicantError;

/// Parses a raw training file into a normalized dataset.
///
/// The header must declare 5 attributes and 3 classes.
///
/// # Errors
///
/// - [`ApplicantError::Shape`] if the header declares another shape.
/// - [`ApplicantError::Io`] for missing or malformed tokens.
/// - [`ApplicantError::Dataset`] if a record's class is not `low`,
///   `medium` or `high`.
pub fn parse_training(input: &str) -> Result<Dataset, ApplicantError> {
    let mut tokens = TokenReader::new(input);
    let (n_records, n_attributes, n_classes) = parse_dataset_header(&mut tokens)?;
    if n_attributes != N_ATTRIBUTES || n_classes != CreditClass::COUNT {
        return Err(ApplicantError::Shape {
            n_attributes,
            n_classes,
            expected_attributes: N_ATTRIBUTES,
            expected_classes: CreditClass::COUNT,
        });
    }

    let mut features = Vec::with_capacity(header_capacity(n_records * N_ATTRIBUTES));
    let mut labels = Vec::with_capacity(header_capacity(n_records));
    for _ in 0..n_records {
        let applicant = Applicant::read(&mut tokens)?;
        let (_, class) = tokens.next_token("credit class")?;
        features.extend(applicant.normalize());
        labels.push(CreditClass::from_token(class).label());
    }
    warn_trailing(&mut tokens, "training records");

    Ok(Dataset::new(features, labels, N_ATTRIBUTES, n_classes)?)
}

/// Parses a raw test file into normalized queries.
///
/// # Errors
///
/// Returns [`ApplicantError::Io`] for missing or malformed tokens.
pub fn parse_test(input: &str) -> Result<Queries, ApplicantError> {
    let mut tokens = TokenReader::new(input);
    let n_queries: usize = tokens.next_parsed("query count")?;

    let capacity = header_capacity(n_queries.saturating_mul(N_ATTRIBUTES));
    let mut features = Vec::with_capacity(capacity);
    for _ in 0..n_queries {
        features.extend(Applicant::read(&mut tokens)?.normalize());
    }
    warn_trailing(&mut tokens, "test records");

    Ok(Queries::new(features, N_ATTRIBUTES)?)
}

/// Reads and normalizes a raw training file.
///
/// # Errors
///
/// Returns [`ApplicantError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_training`].
pub fn read_training(path: &Path) -> Result<Dataset, ApplicantError> {
    let dataset = parse_training(&read_text(path)?)?;
    debug!(path = %path.display(), n_records = dataset.n_records(), "training applicants loaded");
    Ok(dataset)
}

/// Reads and normalizes a raw test file.
///
/// # Errors
///
/// Returns [`ApplicantError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_test`].
pub fn read_test(path: &Path) -> Result<Queries, ApplicantError> {
    let queries = parse_test(&read_text(path)?)?;
    debug!(path = %path.display(), n_queries = queries.len(), "test applicants loaded");
    Ok(queries)
}
