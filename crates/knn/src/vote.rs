//! Majority vote over neighbor labels.

use std::collections::BTreeMap;

use knnlab_dataset::Label;

/// Returns the most frequent label in `labels`.
///
/// Ties are broken explicitly in favour of the smallest label value among
/// those sharing the highest count, so `[2, 1, 2, 1]` votes `1`. Returns
/// `None` for an empty slice.
///
/// # Example
///
/// ```
/// use knnlab_knn::majority_label;
///
/// assert_eq!(majority_label(&[0, 0, 0, 1, 1]), Some(0));
/// assert_eq!(majority_label(&[3, 1, 3, 1]), Some(1));
/// ```
pub fn majority_label(labels: &[Label]) -> Option<Label> {
    let mut counts: BTreeMap<Label, usize> = BTreeMap::new();
    for &label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    // Ascending label order + strict `>` keeps the smallest label on ties.
    let mut best: Option<(Label, usize)> = None;
    for (label, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}
