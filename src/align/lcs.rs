//! Longest-common-subsequence alignment.

use super::{AlignedPair, SequenceAligner};
use crate::model::ChangeKind;

/// Aligner backed by the classic O(n·m) LCS dynamic program.
///
/// Output is merged: a run of removals immediately followed by a run of
/// additions becomes position-wise `Modified` pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LcsAligner;

impl LcsAligner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SequenceAligner for LcsAligner {
    fn align<T, F>(&self, left: &[T], right: &[T], eq: F) -> Vec<AlignedPair>
    where
        F: Fn(&T, &T) -> bool,
    {
        merge_modified(lcs_pairs(left, right, eq))
    }

    fn name(&self) -> &'static str {
        "lcs"
    }
}

/// Unmerged LCS alignment: every entry is `Unchanged`, `Added` or `Removed`.
///
/// Backtracking prefers a match, then the larger table value; ties consume
/// from the right, so within a changed region removals precede additions.
pub fn lcs_pairs<T, F>(left: &[T], right: &[T], eq: F) -> Vec<AlignedPair>
where
    F: Fn(&T, &T) -> bool,
{
    let n = left.len();
    let m = right.len();
    let width = m + 1;

    // Flat (n+1) x (m+1) table, row-major.
    let mut table = vec![0u32; (n + 1) * width];
    for i in 1..=n {
        for j in 1..=m {
            table[i * width + j] = if eq(&left[i - 1], &right[j - 1]) {
                table[(i - 1) * width + j - 1] + 1
            } else {
                table[(i - 1) * width + j].max(table[i * width + j - 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && eq(&left[i - 1], &right[j - 1]) {
            pairs.push(AlignedPair::unchanged(i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i * width + j - 1] >= table[(i - 1) * width + j]) {
            pairs.push(AlignedPair::added(j - 1));
            j -= 1;
        } else {
            pairs.push(AlignedPair::removed(i - 1));
            i -= 1;
        }
    }

    pairs.reverse();
    pairs
}

/// Pair removals with the additions that immediately follow them.
///
/// The k-th removal of a run is paired with the k-th addition of the next
/// run; unpaired leftovers keep their classification.
#[must_use]
pub fn merge_modified(pairs: Vec<AlignedPair>) -> Vec<AlignedPair> {
    let mut merged = Vec::with_capacity(pairs.len());
    let mut idx = 0;

    while idx < pairs.len() {
        if pairs[idx].kind != ChangeKind::Removed {
            merged.push(pairs[idx]);
            idx += 1;
            continue;
        }

        let removed_start = idx;
        while idx < pairs.len() && pairs[idx].kind == ChangeKind::Removed {
            idx += 1;
        }
        let added_start = idx;
        while idx < pairs.len() && pairs[idx].kind == ChangeKind::Added {
            idx += 1;
        }

        let removed = &pairs[removed_start..added_start];
        let added = &pairs[added_start..idx];
        let paired = removed.len().min(added.len());

        for (r, a) in removed.iter().zip(added) {
            merged.push(AlignedPair {
                kind: ChangeKind::Modified,
                left: r.left,
                right: a.right,
            });
        }
        merged.extend_from_slice(&removed[paired..]);
        merged.extend_from_slice(&added[paired..]);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(pairs: &[AlignedPair]) -> Vec<ChangeKind> {
        pairs.iter().map(|p| p.kind).collect()
    }

    #[test]
    fn test_identical_sequences() {
        let pairs = LcsAligner.align(&["a", "b", "c"], &["a", "b", "c"], |a, b| a == b);
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|p| p.kind == ChangeKind::Unchanged));
    }

    #[test]
    fn test_empty_sides() {
        let left: [&str; 0] = [];
        let pairs = LcsAligner.align(&left, &["x", "y"], |a, b| a == b);
        assert_eq!(kinds(&pairs), vec![ChangeKind::Added, ChangeKind::Added]);

        let pairs = LcsAligner.align(&["x"], &left, |a, b| a == b);
        assert_eq!(kinds(&pairs), vec![ChangeKind::Removed]);

        assert!(LcsAligner.align(&left, &left, |a, b| a == b).is_empty());
    }

    #[test]
    fn test_tie_orders_removed_before_added() {
        let pairs = lcs_pairs(&["line1", "line2"], &["line1", "line2x"], |a, b| a == b);
        assert_eq!(
            kinds(&pairs),
            vec![ChangeKind::Unchanged, ChangeKind::Removed, ChangeKind::Added]
        );
    }

    #[test]
    fn test_merge_same_position_into_modified() {
        let pairs = LcsAligner.align(&["line1", "line2"], &["line1", "line2x"], |a, b| a == b);
        assert_eq!(kinds(&pairs), vec![ChangeKind::Unchanged, ChangeKind::Modified]);
        assert_eq!(pairs[1].left, Some(1));
        assert_eq!(pairs[1].right, Some(1));
    }

    #[test]
    fn test_merge_uneven_runs() {
        let pairs = LcsAligner.align(&["a", "b", "c", "z"], &["x", "z"], |a, b| a == b);
        assert_eq!(
            kinds(&pairs),
            vec![
                ChangeKind::Modified,
                ChangeKind::Removed,
                ChangeKind::Removed,
                ChangeKind::Unchanged
            ]
        );
        assert_eq!(pairs[0].left, Some(0));
        assert_eq!(pairs[0].right, Some(0));
    }

    #[test]
    fn test_pure_insertion_is_not_merged() {
        let pairs = LcsAligner.align(&["a", "c"], &["a", "b", "c"], |a, b| a == b);
        assert_eq!(
            kinds(&pairs),
            vec![ChangeKind::Unchanged, ChangeKind::Added, ChangeKind::Unchanged]
        );
        assert_eq!(pairs[1].right, Some(1));
    }

    #[test]
    fn test_custom_equality() {
        let pairs = LcsAligner.align(&["Hello"], &["hello"], |a: &&str, b: &&str| {
            a.eq_ignore_ascii_case(b)
        });
        assert_eq!(kinds(&pairs), vec![ChangeKind::Unchanged]);
    }

    #[test]
    fn test_every_index_consumed_once() {
        let left = ["a", "b", "c", "d", "e"];
        let right = ["b", "x", "d", "e", "f", "a"];
        let pairs = LcsAligner.align(&left, &right, |a, b| a == b);

        let lefts: Vec<usize> = pairs.iter().filter_map(|p| p.left).collect();
        let rights: Vec<usize> = pairs.iter().filter_map(|p| p.right).collect();
        assert_eq!(lefts, (0..left.len()).collect::<Vec<_>>());
        assert_eq!(rights, (0..right.len()).collect::<Vec<_>>());
    }
}
