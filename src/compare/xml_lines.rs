//! Semantic line reconciliation for XML.
//!
//! Canonicalization may reorder elements, so serialized lines are paired by
//! element identity (line role plus tag) and inner text instead of by raw
//! position. Each paired or unpaired line is then mapped back to its line
//! number in the original input so the rendered diff follows reading order.

use super::lines::split_lines;
use super::xml::{XmlLine, XmlLineKind};
use crate::model::{ChangeKind, ComparisonOptions, DiffLine, Difference, DifferenceKind};
use crate::normalize::{normalize, normalize_case};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Opening or closing tag names on a source line.
static TAG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([A-Za-z_:][\w:.\-]*)").expect("static regex"));

/// Pair canonical lines of both sides and build the display rows.
///
/// `originals` are the raw input texts, used only to recover source line
/// numbers.
pub(crate) fn reconcile_lines(
    left: &[XmlLine],
    right: &[XmlLine],
    differences: &[Difference],
    opts: &ComparisonOptions,
    originals: (&str, &str),
) -> Vec<DiffLine> {
    let flagged: HashSet<&str> = differences
        .iter()
        .filter(|d| matches!(d.kind, DifferenceKind::Modified | DifferenceKind::AttributeChanged))
        .map(|d| d.path.as_str())
        .collect();

    let left_numbers = map_original_lines(left, originals.0, opts);
    let right_numbers = map_original_lines(right, originals.1, opts);

    let mut consumed = vec![false; right.len()];
    let mut rows = Vec::with_capacity(left.len().max(right.len()));

    for (i, line) in left.iter().enumerate() {
        let positional = opts.ignore_key_order
            && right.get(i).is_some_and(|r| same_key(line, r))
            && !consumed[i];
        let partner = if positional {
            Some(i)
        } else {
            find_partner(line, right, &consumed)
        };

        match partner {
            Some(j) => {
                consumed[j] = true;
                let kind = classify(line, &right[j], &flagged, opts);
                rows.push(DiffLine::paired(
                    kind,
                    (left_numbers[i], line.text.as_str()),
                    (right_numbers[j], right[j].text.as_str()),
                ));
            }
            None => rows.push(DiffLine::removed(left_numbers[i], line.text.as_str())),
        }
    }

    for (j, line) in right.iter().enumerate() {
        if !consumed[j] {
            rows.push(DiffLine::added(right_numbers[j], line.text.as_str()));
        }
    }

    rows.retain(|row| !is_blank(row.left.as_deref()) || !is_blank(row.right.as_deref()));
    rows.sort_by_key(DiffLine::sort_key);
    rows
}

fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |t| t.trim().is_empty())
}

fn same_key(a: &XmlLine, b: &XmlLine) -> bool {
    a.kind == b.kind && a.tag == b.tag
}

/// First unconsumed right line with the same role and tag, preferring an
/// identical line, then one with the same inner text.
fn find_partner(line: &XmlLine, right: &[XmlLine], consumed: &[bool]) -> Option<usize> {
    let candidates: Vec<usize> = right
        .iter()
        .enumerate()
        .filter(|(j, r)| !consumed[*j] && same_key(line, r))
        .map(|(j, _)| j)
        .collect();

    candidates
        .iter()
        .find(|&&j| right[j].text.trim() == line.text.trim())
        .or_else(|| {
            candidates
                .iter()
                .find(|&&j| right[j].inner_text == line.inner_text)
        })
        .or_else(|| candidates.first())
        .copied()
}

fn classify(
    left: &XmlLine,
    right: &XmlLine,
    flagged: &HashSet<&str>,
    opts: &ComparisonOptions,
) -> ChangeKind {
    let flagged_open = left.kind == XmlLineKind::Open
        && (flagged.contains(left.path.as_str()) || flagged.contains(right.path.as_str()));
    let inner_differs = left.inner_text.as_deref().map(|t| normalize(t, opts))
        != right.inner_text.as_deref().map(|t| normalize(t, opts));

    if flagged_open
        || (left.kind != XmlLineKind::Close && inner_differs)
        || left.text.trim() != right.text.trim()
    {
        ChangeKind::Modified
    } else {
        ChangeKind::Unchanged
    }
}

// ============================================================================
// Original line back-mapping
// ============================================================================

struct SourceLine {
    number: usize,
    content: String,
    tags: Vec<(bool, String)>,
}

/// Recover the 1-based source line of each canonical line.
///
/// Lines are matched on normalized trimmed content first, then on a tag of
/// the same role. Each source line is consumed at most once, in source
/// order, so repeated identical lines map to distinct occurrences. Unmatched
/// lines inherit the previous mapping.
fn map_original_lines(lines: &[XmlLine], original: &str, opts: &ComparisonOptions) -> Vec<usize> {
    let source: Vec<SourceLine> = split_lines(original)
        .into_iter()
        .enumerate()
        .map(|(index, text)| SourceLine {
            number: index + 1,
            content: normalize(text.trim(), opts),
            tags: TAG_NAME
                .captures_iter(text)
                .map(|c| (&c[1] == "/", normalize_case(&c[2], opts)))
                .collect(),
        })
        .collect();

    let mut consumed = vec![false; source.len()];
    let mut previous: Option<usize> = None;
    let mut numbers = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        let content = line.text.trim();
        let by_content = source
            .iter()
            .position(|s| !consumed[s.number - 1] && !s.content.is_empty() && s.content == content);
        let found = by_content.or_else(|| {
            let closing = line.kind == XmlLineKind::Close;
            source.iter().position(|s| {
                !consumed[s.number - 1]
                    && line.kind != XmlLineKind::Text
                    && s.tags.iter().any(|(c, t)| *c == closing && *t == line.tag)
            })
        });

        let number = match found {
            Some(pos) => {
                consumed[pos] = true;
                source[pos].number
            }
            None => previous.unwrap_or(index + 1),
        };
        previous = Some(number);
        numbers.push(number);
    }

    numbers
}
