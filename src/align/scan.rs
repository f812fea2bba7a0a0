//! Forward-scan alignment heuristic.

use super::{AlignedPair, SequenceAligner};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default number of items searched ahead for the next exact match.
pub const DEFAULT_LOOKAHEAD_WINDOW: usize = 100;
/// Default number of items sampled when no nearby match exists.
pub const DEFAULT_SIMILARITY_SAMPLE: usize = 10;
/// Default cross-match rate above which a differing pair counts as modified.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.1;
/// Items this close to either end resolve to removed/added, never modified.
pub const DEFAULT_TAIL_GUARD: usize = 2;

/// Tunable thresholds for [`ForwardScanAligner`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScanConfig {
    /// How far ahead to search on each side for the next exact match
    pub lookahead_window: usize,
    /// Size of the look-ahead sample used for the similarity check
    pub similarity_sample: usize,
    /// Cross-match rate (0.0-1.0) above which documents are locally similar
    pub similarity_threshold: f64,
    /// Distance from the end within which pairs never become modified
    pub tail_guard: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            lookahead_window: DEFAULT_LOOKAHEAD_WINDOW,
            similarity_sample: DEFAULT_SIMILARITY_SAMPLE,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            tail_guard: DEFAULT_TAIL_GUARD,
        }
    }
}

/// Linear-time aligner for large inputs.
///
/// Walks both sequences forward. On a mismatch it looks up to
/// `lookahead_window` items ahead on each side for the current item of the
/// other side; whichever side re-synchronises sooner decides whether the
/// other side's item was added or removed. With no nearby match the pair is
/// `Modified` when a short sample ahead shows the sequences are locally
/// similar, and a removal plus an addition otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardScanAligner {
    config: ScanConfig,
}

impl ForwardScanAligner {
    #[must_use]
    pub const fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Distance to the first item in `items[start..start + window]` matching `pred`.
    fn find_ahead<T>(&self, items: &[T], start: usize, pred: impl Fn(&T) -> bool) -> Option<usize> {
        let end = start
            .saturating_add(self.config.lookahead_window)
            .min(items.len());
        (start..end).find(|&k| pred(&items[k])).map(|k| k - start)
    }

    const fn near_end(&self, index: usize, len: usize) -> bool {
        len - index <= self.config.tail_guard
    }

    fn locally_similar<T, F>(&self, left: &[T], right: &[T], i: usize, j: usize, eq: &F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        let sample = self.config.similarity_sample;
        let left_sample = &left[(i + 1).min(left.len())..(i + 1 + sample).min(left.len())];
        let right_sample = &right[(j + 1).min(right.len())..(j + 1 + sample).min(right.len())];

        let denominator = left_sample.len().max(right_sample.len());
        if denominator == 0 {
            return false;
        }

        let cross_matches = left_sample
            .iter()
            .filter(|l| right_sample.iter().any(|r| eq(l, r)))
            .count();
        cross_matches as f64 / denominator as f64 > self.config.similarity_threshold
    }
}

impl SequenceAligner for ForwardScanAligner {
    fn align<T, F>(&self, left: &[T], right: &[T], eq: F) -> Vec<AlignedPair>
    where
        F: Fn(&T, &T) -> bool,
    {
        let (n, m) = (left.len(), right.len());
        let mut pairs = Vec::with_capacity(n.max(m));
        let (mut i, mut j) = (0, 0);

        while i < n && j < m {
            if eq(&left[i], &right[j]) {
                pairs.push(AlignedPair::unchanged(i, j));
                i += 1;
                j += 1;
                continue;
            }

            let left_item_ahead_in_right = self.find_ahead(right, j + 1, |r| eq(&left[i], r));
            let right_item_ahead_in_left = self.find_ahead(left, i + 1, |l| eq(l, &right[j]));

            match (left_item_ahead_in_right, right_item_ahead_in_left) {
                (Some(in_right), Some(in_left)) if in_right <= in_left => {
                    pairs.push(AlignedPair::added(j));
                    j += 1;
                }
                (Some(_), None) => {
                    pairs.push(AlignedPair::added(j));
                    j += 1;
                }
                (_, Some(_)) => {
                    pairs.push(AlignedPair::removed(i));
                    i += 1;
                }
                (None, None) => {
                    if !self.near_end(i, n)
                        && !self.near_end(j, m)
                        && self.locally_similar(left, right, i, j, &eq)
                    {
                        pairs.push(AlignedPair::modified(i, j));
                    } else {
                        pairs.push(AlignedPair::removed(i));
                        pairs.push(AlignedPair::added(j));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        pairs.extend((i..n).map(AlignedPair::removed));
        pairs.extend((j..m).map(AlignedPair::added));
        pairs
    }

    fn name(&self) -> &'static str {
        "forward-scan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChangeKind;

    fn kinds(pairs: &[AlignedPair]) -> Vec<ChangeKind> {
        pairs.iter().map(|p| p.kind).collect()
    }

    fn lines(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{prefix}{i}")).collect()
    }

    #[test]
    fn test_insertion_detected_by_lookahead() {
        let aligner = ForwardScanAligner::default();
        let pairs = aligner.align(&["a", "b", "c"], &["a", "x", "b", "c"], |a, b| a == b);
        assert_eq!(
            kinds(&pairs),
            vec![
                ChangeKind::Unchanged,
                ChangeKind::Added,
                ChangeKind::Unchanged,
                ChangeKind::Unchanged
            ]
        );
    }

    #[test]
    fn test_deletion_detected_by_lookahead() {
        let aligner = ForwardScanAligner::default();
        let pairs = aligner.align(&["a", "x", "b", "c"], &["a", "b", "c"], |a, b| a == b);
        assert_eq!(pairs[1], AlignedPair::removed(1));
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn test_similar_region_becomes_modified() {
        let mut left = lines("same", 20);
        let mut right = left.clone();
        left[5] = "old line".to_string();
        right[5] = "new line".to_string();
        // Break the exact look-ahead match for the changed line only.
        let pairs = ForwardScanAligner::default().align(&left, &right, |a, b| a == b);
        assert_eq!(pairs[5], AlignedPair::modified(5, 5));
        assert_eq!(
            pairs.iter().filter(|p| p.kind.is_change()).count(),
            1,
            "only the edited line should change"
        );
    }

    #[test]
    fn test_dissimilar_region_is_removed_and_added() {
        let left = lines("left", 20);
        let right = lines("right", 20);
        let pairs = ForwardScanAligner::default().align(&left, &right, |a, b| a == b);
        assert!(pairs.iter().all(|p| p.kind != ChangeKind::Modified));
        assert_eq!(pairs.iter().filter(|p| p.kind == ChangeKind::Removed).count(), 20);
        assert_eq!(pairs.iter().filter(|p| p.kind == ChangeKind::Added).count(), 20);
    }

    #[test]
    fn test_tail_never_modified() {
        let pairs = ForwardScanAligner::default().align(&["a", "b"], &["a", "c"], |a, b| a == b);
        assert_eq!(
            kinds(&pairs),
            vec![ChangeKind::Unchanged, ChangeKind::Removed, ChangeKind::Added]
        );
    }

    #[test]
    fn test_remaining_items_flushed() {
        let left: [&str; 0] = [];
        let pairs = ForwardScanAligner::default().align(&left, &["x", "y"], |a, b| a == b);
        assert_eq!(kinds(&pairs), vec![ChangeKind::Added, ChangeKind::Added]);
    }

    #[test]
    fn test_window_limits_search() {
        let config = ScanConfig {
            lookahead_window: 1,
            ..ScanConfig::default()
        };
        let aligner = ForwardScanAligner::new(config);
        // "a" reappears two items ahead on the right, beyond the window.
        let pairs = aligner.align(&["a"], &["x", "y", "a"], |a, b| a == b);
        assert_eq!(pairs[0].kind, ChangeKind::Removed);
    }
}
