//! Line and word comparison of plain text.

use super::lines::{pairs_to_lines, split_lines};
use crate::align::{align_with, diff_words, whole_line_words, AlignmentStrategy, ScanConfig};
use crate::model::{
    ChangeKind, CompareResult, ComparisonOptions, DiffLine, Difference, DifferenceKind, TextMode,
};
use crate::normalize::normalize;
use tracing::debug;

/// Compare two texts line by line with the default LCS strategy.
pub fn compare_text(
    left: &str,
    right: &str,
    opts: &ComparisonOptions,
    mode: TextMode,
) -> CompareResult {
    compare_text_with(
        left,
        right,
        opts,
        mode,
        AlignmentStrategy::Lcs,
        &ScanConfig::default(),
    )
}

/// Compare two texts with an explicit alignment strategy.
///
/// Lines are aligned on their normalized form while the rows keep the
/// original text. Every changed row also yields a [`Difference`] at path
/// `line <n>`.
pub fn compare_text_with(
    left: &str,
    right: &str,
    opts: &ComparisonOptions,
    mode: TextMode,
    strategy: AlignmentStrategy,
    scan: &ScanConfig,
) -> CompareResult {
    let left_lines = split_lines(left);
    let right_lines = split_lines(right);
    let left_norm: Vec<String> = left_lines.iter().map(|l| normalize(l, opts)).collect();
    let right_norm: Vec<String> = right_lines.iter().map(|l| normalize(l, opts)).collect();

    let pairs = align_with(strategy, scan, &left_norm, &right_norm, |a, b| a == b);
    let mut diff_lines = pairs_to_lines(&pairs, &left_lines, &right_lines);

    if mode == TextMode::Word {
        for line in &mut diff_lines {
            attach_word_diffs(line, opts);
        }
    }

    let differences = line_differences(&diff_lines);
    let are_equal = differences.is_empty();

    debug!(
        strategy = %strategy,
        ?mode,
        left_lines = left_lines.len(),
        right_lines = right_lines.len(),
        changed = differences.len(),
        "text comparison complete"
    );
    CompareResult::new(are_equal, diff_lines, differences)
}

fn attach_word_diffs(line: &mut DiffLine, opts: &ComparisonOptions) {
    match (&line.left, &line.right) {
        (Some(left), Some(right)) => {
            let (left_words, right_words) = diff_words(left, right, opts);
            line.left_words = Some(left_words);
            line.right_words = Some(right_words);
        }
        (Some(left), None) => line.left_words = Some(whole_line_words(left, ChangeKind::Removed)),
        (None, Some(right)) => line.right_words = Some(whole_line_words(right, ChangeKind::Added)),
        (None, None) => {}
    }
}

/// One difference per changed row, numbered in display order.
fn line_differences(lines: &[DiffLine]) -> Vec<Difference> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.kind.is_change())
        .map(|(index, line)| {
            let path = format!("line {}", index + 1);
            match line.kind {
                ChangeKind::Added => Difference::new(DifferenceKind::Added, path, "Line added")
                    .with_new_value(line.right.clone()),
                ChangeKind::Removed => {
                    Difference::new(DifferenceKind::Removed, path, "Line removed")
                        .with_old_value(line.left.clone())
                }
                _ => Difference::new(DifferenceKind::Modified, path, "Line modified")
                    .with_old_value(line.left.clone())
                    .with_new_value(line.right.clone()),
            }
        })
        .collect()
}
