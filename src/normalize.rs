//! Per-value string normalization shared by all comparators.

use crate::model::ComparisonOptions;

/// Normalize a value under the given options.
///
/// Whitespace is collapsed first (any run becomes one space, ends trimmed),
/// then case is folded. The function is total and idempotent.
#[must_use]
pub fn normalize(value: &str, opts: &ComparisonOptions) -> String {
    let collapsed = if opts.ignore_whitespace {
        collapse_whitespace(value)
    } else {
        value.to_string()
    };
    if opts.case_sensitive {
        collapsed
    } else {
        collapsed.to_lowercase()
    }
}

/// Fold case only, for identifiers such as object keys and tag names.
#[must_use]
pub fn normalize_case(value: &str, opts: &ComparisonOptions) -> String {
    if opts.case_sensitive {
        value.to_string()
    } else {
        value.to_lowercase()
    }
}

/// Collapse every whitespace run to a single space and trim both ends.
#[must_use]
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
