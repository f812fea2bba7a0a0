//! Word-level diffing within a pair of lines.

use super::lcs_pairs;
use crate::model::{ChangeKind, ComparisonOptions, WordDiff};
use crate::normalize::normalize;

/// Split a line into whitespace-separated words.
#[must_use]
pub fn split_words(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Diff two lines word by word.
///
/// Words are compared after normalization but returned in their original
/// form. The alignment is not merged: a changed word shows up as `Removed`
/// in the left list and `Added` in the right list.
#[must_use]
pub fn diff_words(
    left: &str,
    right: &str,
    opts: &ComparisonOptions,
) -> (Vec<WordDiff>, Vec<WordDiff>) {
    let left_words = split_words(left);
    let right_words = split_words(right);
    let left_norm: Vec<String> = left_words.iter().map(|w| normalize(w, opts)).collect();
    let right_norm: Vec<String> = right_words.iter().map(|w| normalize(w, opts)).collect();

    let mut left_out = Vec::with_capacity(left_words.len());
    let mut right_out = Vec::with_capacity(right_words.len());

    for pair in lcs_pairs(&left_norm, &right_norm, |a, b| a == b) {
        match (pair.left, pair.right) {
            (Some(l), Some(r)) => {
                left_out.push(WordDiff::new(left_words[l], ChangeKind::Unchanged));
                right_out.push(WordDiff::new(right_words[r], ChangeKind::Unchanged));
            }
            (Some(l), None) => left_out.push(WordDiff::new(left_words[l], ChangeKind::Removed)),
            (None, Some(r)) => right_out.push(WordDiff::new(right_words[r], ChangeKind::Added)),
            (None, None) => {}
        }
    }

    (left_out, right_out)
}

/// Mark every word of a one-sided line with `kind`.
#[must_use]
pub fn whole_line_words(line: &str, kind: ChangeKind) -> Vec<WordDiff> {
    split_words(line)
        .into_iter()
        .map(|w| WordDiff::new(w, kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_token_splits_sides() {
        let (left, right) = diff_words("line2", "line2x", &ComparisonOptions::default());
        assert_eq!(left, vec![WordDiff::new("line2", ChangeKind::Removed)]);
        assert_eq!(right, vec![WordDiff::new("line2x", ChangeKind::Added)]);
    }

    #[test]
    fn test_shared_words_unchanged() {
        let (left, right) = diff_words(
            "the quick brown fox",
            "the slow brown fox",
            &ComparisonOptions::default(),
        );
        let left_kinds: Vec<_> = left.iter().map(|w| w.kind).collect();
        assert_eq!(
            left_kinds,
            vec![
                ChangeKind::Unchanged,
                ChangeKind::Removed,
                ChangeKind::Unchanged,
                ChangeKind::Unchanged
            ]
        );
        assert_eq!(right[1], WordDiff::new("slow", ChangeKind::Added));
    }

    #[test]
    fn test_case_insensitive_keeps_original_words() {
        let opts = ComparisonOptions::default().case_sensitive(false);
        let (left, right) = diff_words("Hello World", "hello world", &opts);
        assert!(left.iter().all(|w| w.kind == ChangeKind::Unchanged));
        assert_eq!(left[0].word, "Hello");
        assert_eq!(right[0].word, "hello");
    }

    #[test]
    fn test_whole_line_words() {
        let words = whole_line_words("  added  line ", ChangeKind::Added);
        assert_eq!(
            words,
            vec![
                WordDiff::new("added", ChangeKind::Added),
                WordDiff::new("line", ChangeKind::Added)
            ]
        );
        assert!(whole_line_words("", ChangeKind::Removed).is_empty());
    }
}
