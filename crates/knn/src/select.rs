//! Top-k nearest neighbor selection.

use std::cmp::Ordering;

use crate::result::Neighbor;

/// Orders by distance, then by record index.
///
/// Keys are unique per candidate, so any selection algorithm built on this
/// ordering picks the lower index among equal distances.
#[inline]
fn nearest_first(a: &Neighbor, b: &Neighbor) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.index.cmp(&b.index))
}

/// Returns the `k` candidates with the smallest distances, nearest first.
///
/// Equal distances are broken by the lower record index. If `k` exceeds the
/// number of candidates, all candidates are returned; `k = 0` yields an empty
/// set.
///
/// ```
/// use kin_knn::{Neighbor, select_nearest};
///
/// let candidates = vec![
///     Neighbor::new(0, 2.0),
///     Neighbor::new(1, 1.0),
///     Neighbor::new(2, 1.0),
/// ];
/// let nearest = select_nearest(candidates, 2);
/// assert_eq!(nearest, vec![Neighbor::new(1, 1.0), Neighbor::new(2, 1.0)]);
/// ```
pub fn select_nearest(mut candidates: Vec<Neighbor>, k: usize) -> Vec<Neighbor> {
    select_k_nearest(&mut candidates, k);
    candidates
}

/// In-place form of [`select_nearest`], reusing the candidate buffer.
///
/// Partial-selects the k smallest with `select_nth_unstable_by`, then sorts
/// only that prefix.
pub(crate) fn select_k_nearest(candidates: &mut Vec<Neighbor>, k: usize) {
    if k == 0 {
        candidates.clear();
        return;
    }
    if k < candidates.len() {
        candidates.select_nth_unstable_by(k - 1, nearest_first);
        candidates.truncate(k);
    }
    candidates.sort_unstable_by(nearest_first);
}
