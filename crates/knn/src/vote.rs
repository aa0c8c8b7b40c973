//! Majority voting over neighbor labels.

use crate::dataset::Label;
use crate::error::KnnError;

/// Returns the most frequent label among `labels`.
///
/// Only labels that receive votes are tallied. Ties go to the lowest class id.
///
/// # Errors
///
/// - [`KnnError::NoNeighbors`] if `labels` is empty.
/// - [`KnnError::InvalidLabel`] if a label is outside `1..=n_classes`.
///
/// ```
/// use kin_knn::{Label, majority_vote};
///
/// let labels = [2, 3, 3, 2].map(Label::new);
/// assert_eq!(majority_vote(labels, 3).unwrap(), Label::new(2));
/// ```
pub fn majority_vote<I>(labels: I, n_classes: u32) -> Result<Label, KnnError>
where
    I: IntoIterator<Item = Label>,
{
    let mut tally = Vec::new();
    vote_with_tally(labels, n_classes, &mut tally)
}

/// [`majority_vote`] with a caller-provided tally buffer.
///
/// The tally holds one `(label, count)` entry per distinct label voted, so
/// its size is bounded by the number of votes, not by `n_classes`.
pub(crate) fn vote_with_tally<I>(
    labels: I,
    n_classes: u32,
    tally: &mut Vec<(Label, usize)>,
) -> Result<Label, KnnError>
where
    I: IntoIterator<Item = Label>,
{
    tally.clear();

    for label in labels {
        if label.slot(n_classes).is_none() {
            return Err(KnnError::InvalidLabel {
                label: label.get(),
                n_classes,
            });
        }
        match tally.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => tally.push((label, 1)),
        }
    }

    // Highest count wins; on equal counts the lower class id wins.
    tally
        .iter()
        .max_by(|(a, ca), (b, cb)| ca.cmp(cb).then_with(|| b.cmp(a)))
        .map(|&(label, _)| label)
        .ok_or(KnnError::NoNeighbors)
}
