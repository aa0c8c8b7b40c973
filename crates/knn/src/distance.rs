//! Euclidean distance computation.

use crate::error::KnnError;
use crate::result::Neighbor;

/// Euclidean distance between two feature vectors.
///
/// ```text
/// d(u, v) = sqrt(Σᵢ (uᵢ − vᵢ)²)
/// ```
///
/// # Errors
///
/// Returns [`KnnError::DimensionMismatch`] if the vectors differ in length.
pub fn euclidean(u: &[f64], v: &[f64]) -> Result<f64, KnnError> {
    if u.len() != v.len() {
        return Err(KnnError::DimensionMismatch {
            expected: u.len(),
            got: v.len(),
        });
    }
    Ok(sq_euclidean(u, v).sqrt())
}

#[inline]
fn sq_euclidean(u: &[f64], v: &[f64]) -> f64 {
    u.iter()
        .zip(v)
        .map(|(a, b)| {
            let d = a - b;
            d * d
        })
        .sum()
}

/// Computes the distance from `query` to every row of `features`, skipping `withheld`.
///
/// `features` is a flat row-major matrix `[n_rows × n_attributes]`. Results are
/// written to `out` as `(row index, distance)` pairs in row order.
///
/// # Panics
///
/// Debug-asserts that `features.len() % n_attributes == 0` and
/// `query.len() == n_attributes`.
pub(crate) fn euclidean_distances(
    features: &[f64],
    n_attributes: usize,
    query: &[f64],
    withheld: Option<usize>,
    out: &mut Vec<Neighbor>,
) {
    debug_assert_eq!(features.len() % n_attributes, 0);
    debug_assert_eq!(query.len(), n_attributes);

    out.clear();
    out.extend(
        features
            .chunks_exact(n_attributes)
            .enumerate()
            .filter(|&(i, _)| Some(i) != withheld)
            .map(|(i, row)| Neighbor::new(i, sq_euclidean(row, query).sqrt())),
    );
}
