//! Helpers shared by the line-oriented comparators.

use crate::align::{AlignedPair, LcsAligner, SequenceAligner};
use crate::model::DiffLine;
use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").expect("static regex"));

/// Split text on `\n` or `\r\n`. Empty input yields one empty line.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK.split(text).collect()
}

/// Turn aligned index pairs into display rows with 1-based line numbers.
pub(crate) fn pairs_to_lines(pairs: &[AlignedPair], left: &[&str], right: &[&str]) -> Vec<DiffLine> {
    pairs
        .iter()
        .filter_map(|pair| match (pair.left, pair.right) {
            (Some(l), Some(r)) => Some(DiffLine::paired(
                pair.kind,
                (l + 1, left[l]),
                (r + 1, right[r]),
            )),
            (Some(l), None) => Some(DiffLine::removed(l + 1, left[l])),
            (None, Some(r)) => Some(DiffLine::added(r + 1, right[r])),
            (None, None) => None,
        })
        .collect()
}

/// Exact LCS line diff of two texts, used for display and parse-error fallbacks.
pub(crate) fn exact_line_diff(left: &str, right: &str) -> Vec<DiffLine> {
    let left_lines = split_lines(left);
    let right_lines = split_lines(right);
    let pairs = LcsAligner.align(&left_lines, &right_lines, |a, b| a == b);
    pairs_to_lines(&pairs, &left_lines, &right_lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChangeKind;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn test_exact_line_diff_numbers() {
        let lines = exact_line_diff("a\nb\nc", "a\nc\nd");
        let kinds: Vec<_> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChangeKind::Unchanged,
                ChangeKind::Removed,
                ChangeKind::Unchanged,
                ChangeKind::Added
            ]
        );
        assert_eq!(lines[1].left_line_number, Some(2));
        assert_eq!(lines[3].right_line_number, Some(3));
    }
}
