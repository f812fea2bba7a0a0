//! JSON canonicalization and structural comparison.

use super::lines::exact_line_diff;
use super::parse_failure_message;
use crate::model::{
    CompareResult, ComparisonOptions, Difference, DifferenceKind, DocumentFormat, JsonValue,
};
use crate::normalize::{normalize, normalize_case};
use crate::parsers::parse_json;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Compare two JSON texts.
///
/// Parse failures are reported through `has_parse_error` rather than
/// returned as errors.
pub fn compare_json(left: &str, right: &str, opts: &ComparisonOptions) -> CompareResult {
    let (left_value, right_value) = match (parse_json(left), parse_json(right)) {
        (Ok(l), Ok(r)) => (l, r),
        (l, r) => {
            let message =
                parse_failure_message(DocumentFormat::Json, l.as_ref().err(), r.as_ref().err());
            warn!("{message}");
            let left_display = l.map_or_else(|_| left.to_string(), |v| v.to_pretty());
            let right_display = r.map_or_else(|_| right.to_string(), |v| v.to_pretty());
            return CompareResult::parse_error(
                message,
                exact_line_diff(&left_display, &right_display),
            );
        }
    };

    let left_canonical = canonicalize_json(&left_value, opts);
    let right_canonical = canonicalize_json(&right_value, opts);

    let diff_lines = exact_line_diff(&left_canonical.to_pretty(), &right_canonical.to_pretty());

    let mut differences = Vec::new();
    diff_json(
        Some(&left_canonical),
        Some(&right_canonical),
        "",
        opts,
        &mut differences,
    );

    let are_equal =
        differences.is_empty() && left_canonical.to_minified() == right_canonical.to_minified();

    debug!(
        differences = differences.len(),
        lines = diff_lines.len(),
        are_equal,
        "JSON comparison complete"
    );
    CompareResult::new(are_equal, diff_lines, differences)
}

// ============================================================================
// Canonicalization
// ============================================================================

/// Build the canonical form of a value under `opts`.
///
/// Returns a fresh tree; the input is left untouched. Canonicalizing an
/// already canonical value yields the same value.
#[must_use]
pub fn canonicalize_json(value: &JsonValue, opts: &ComparisonOptions) -> JsonValue {
    match value {
        JsonValue::String(s) => JsonValue::String(normalize(s, opts)),
        JsonValue::Array(items) => {
            let mut canonical: Vec<JsonValue> =
                items.iter().map(|v| canonicalize_json(v, opts)).collect();
            if opts.ignore_array_order {
                canonical.sort_by_cached_key(JsonValue::to_minified);
            }
            JsonValue::Array(canonical)
        }
        JsonValue::Object(map) => {
            let mut canonical: IndexMap<String, JsonValue> = IndexMap::with_capacity(map.len());
            for (key, child) in map {
                let key = normalize_case(key, opts);
                // First-seen key wins when case folding makes keys collide.
                if !canonical.contains_key(&key) {
                    canonical.insert(key, canonicalize_json(child, opts));
                }
            }
            if opts.ignore_key_order {
                canonical.sort_by(|a, _, b, _| key_order(a, b));
            }
            JsonValue::Object(canonical)
        }
        JsonValue::Number(n) => JsonValue::Number(canonical_number(n)),
        JsonValue::Null | JsonValue::Bool(_) => value.clone(),
    }
}

/// Largest magnitude below which every integral `f64` is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Integral floats such as `1.0` or `1e2` become integers.
fn canonical_number(n: &serde_json::Number) -> serde_json::Number {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_SAFE_INTEGER => {
            serde_json::Number::from(f as i64)
        }
        _ => n.clone(),
    }
}

/// Sort by case-folded key, then by the raw key for a total order.
fn key_order(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// ============================================================================
// Structural walk
// ============================================================================

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}

/// Walk two canonical values and record every structural difference.
///
/// An absent value and an explicit `null` are both treated as "missing", so
/// a value appearing on one side only is `Added` or `Removed`.
pub fn diff_json(
    left: Option<&JsonValue>,
    right: Option<&JsonValue>,
    path: &str,
    opts: &ComparisonOptions,
    out: &mut Vec<Difference>,
) {
    let left = left.filter(|v| !v.is_null());
    let right = right.filter(|v| !v.is_null());

    match (left, right) {
        (None, None) => {}
        (None, Some(added)) => out.push(
            Difference::new(
                DifferenceKind::Added,
                path,
                format!("Value added at {}", display_path(path)),
            )
            .with_new_value(serde_json::Value::from(added)),
        ),
        (Some(removed), None) => out.push(
            Difference::new(
                DifferenceKind::Removed,
                path,
                format!("Value removed at {}", display_path(path)),
            )
            .with_old_value(serde_json::Value::from(removed)),
        ),
        (Some(JsonValue::Array(l)), Some(JsonValue::Array(r))) => {
            for index in 0..l.len().max(r.len()) {
                diff_json(
                    l.get(index),
                    r.get(index),
                    &format!("{path}[{index}]"),
                    opts,
                    out,
                );
            }
        }
        (Some(JsonValue::Object(l)), Some(JsonValue::Object(r))) => {
            let mut keys: Vec<&String> = l.keys().collect();
            keys.extend(r.keys().filter(|k| !l.contains_key(*k)));
            if opts.ignore_key_order {
                keys.sort_by(|a, b| key_order(a, b));
            }
            for key in keys {
                diff_json(l.get(key), r.get(key), &child_path(path, key), opts, out);
            }
        }
        (Some(l), Some(r)) if l.type_name() != r.type_name() => out.push(
            Difference::new(
                DifferenceKind::Modified,
                path,
                format!(
                    "Type changed from {} to {} at {}",
                    l.type_name(),
                    r.type_name(),
                    display_path(path)
                ),
            )
            .with_old_value(serde_json::Value::from(l))
            .with_new_value(serde_json::Value::from(r)),
        ),
        (Some(l), Some(r)) => {
            if l != r {
                out.push(
                    Difference::new(
                        DifferenceKind::Modified,
                        path,
                        format!("Value changed at {}", display_path(path)),
                    )
                    .with_old_value(serde_json::Value::from(l))
                    .with_new_value(serde_json::Value::from(r)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChangeKind;

    fn parse(text: &str) -> JsonValue {
        parse_json(text).expect("valid json")
    }

    #[test]
    fn test_identical_documents() {
        let text = r#"{"a": [1, 2, {"b": "x"}], "c": null}"#;
        let result = compare_json(text, text, &ComparisonOptions::default());
        assert!(result.are_equal);
        assert!(result.differences.is_empty());
        assert_eq!(result.change_count(), 0);
    }

    #[test]
    fn test_key_order_ignored() {
        let opts = ComparisonOptions::default().ignore_key_order(true);
        let result = compare_json(r#"{"a":1,"b":2}"#, r#"{"b":2,"a":1}"#, &opts);
        assert!(result.are_equal);
    }

    #[test]
    fn test_key_order_only_is_not_equal_without_differences() {
        let result = compare_json(
            r#"{"a":1,"b":2}"#,
            r#"{"b":2,"a":1}"#,
            &ComparisonOptions::default(),
        );
        assert!(!result.are_equal);
        assert!(result.differences.is_empty());
        assert!(result.change_count() > 0);
    }

    #[test]
    fn test_added_key_scenario() {
        let opts = ComparisonOptions::default().ignore_key_order(true);
        let result = compare_json(r#"{"b":1,"a":2}"#, r#"{"a":2,"b":1,"c":3}"#, &opts);

        assert!(!result.are_equal);
        assert_eq!(result.differences.len(), 1);
        let diff = &result.differences[0];
        assert_eq!(diff.kind, DifferenceKind::Added);
        assert_eq!(diff.path, "c");
        assert_eq!(diff.new_value, Some(serde_json::json!(3)));
        assert_eq!(result.added_count, 1);
        assert_eq!(result.removed_count, 0);
    }

    #[test]
    fn test_whitespace_in_values() {
        let opts = ComparisonOptions::default().ignore_whitespace(true);
        let result = compare_json(r#"{"a": "x  y"}"#, r#"{"a":"x y"}"#, &opts);
        assert!(result.are_equal);

        let strict = compare_json(
            r#"{"a": "x  y"}"#,
            r#"{"a":"x y"}"#,
            &ComparisonOptions::default(),
        );
        assert!(!strict.are_equal);
        assert_eq!(strict.differences[0].kind, DifferenceKind::Modified);
    }

    #[test]
    fn test_case_insensitive_keys_and_values() {
        let opts = ComparisonOptions::default().case_sensitive(false);
        let result = compare_json(r#"{"Name": "ALICE"}"#, r#"{"name": "alice"}"#, &opts);
        assert!(result.are_equal);
    }

    #[test]
    fn test_array_order() {
        let left = "[3, 1, 2]";
        let right = "[1, 2, 3]";
        assert!(!compare_json(left, right, &ComparisonOptions::default()).are_equal);

        let opts = ComparisonOptions::default().ignore_array_order(true);
        assert!(compare_json(left, right, &opts).are_equal);
    }

    #[test]
    fn test_array_length_difference() {
        let mut out = Vec::new();
        diff_json(
            Some(&parse("[1, 2]")),
            Some(&parse("[1, 2, 3]")),
            "items",
            &ComparisonOptions::default(),
            &mut out,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, DifferenceKind::Added);
        assert_eq!(out[0].path, "items[2]");
    }

    #[test]
    fn test_type_change_is_modified() {
        let mut out = Vec::new();
        diff_json(
            Some(&parse(r#"{"a": {"b": 1}}"#)),
            Some(&parse(r#"{"a": {"b": "1"}}"#)),
            "",
            &ComparisonOptions::default(),
            &mut out,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, DifferenceKind::Modified);
        assert_eq!(out[0].path, "a.b");
        assert!(out[0].message.contains("number to string"));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let mut out = Vec::new();
        diff_json(
            Some(&parse(r#"{"a": null}"#)),
            Some(&parse(r#"{"a": 5}"#)),
            "",
            &ComparisonOptions::default(),
            &mut out,
        );
        assert_eq!(out[0].kind, DifferenceKind::Added);
        assert_eq!(out[0].path, "a");
    }

    #[test]
    fn test_canonicalize_is_idempotent_and_pure() {
        let opts = ComparisonOptions::lenient();
        let original = parse(r#"{"B": [" Z ", "a", {"Y": 1, "x": 2}], "a": "Hi  There"}"#);
        let snapshot = original.clone();

        let once = canonicalize_json(&original, &opts);
        let twice = canonicalize_json(&once, &opts);
        assert_eq!(once, twice);
        assert_eq!(original, snapshot);
    }

    #[test]
    fn test_case_fold_collision_keeps_first() {
        let opts = ComparisonOptions::default().case_sensitive(false);
        let canonical = canonicalize_json(&parse(r#"{"Key": 1, "key": 2}"#), &opts);
        assert_eq!(canonical.to_minified(), r#"{"key":1}"#);
    }

    #[test]
    fn test_parse_error_left() {
        let result = compare_json("{invalid", r#"{"a": 1}"#, &ComparisonOptions::default());
        assert!(result.has_parse_error);
        assert!(!result.are_equal);
        let message = result.parse_error_message.as_deref().unwrap_or_default();
        assert!(message.starts_with("Left JSON"), "{message}");
        assert!(!result.diff_lines.is_empty());
    }

    #[test]
    fn test_parse_error_both() {
        let result = compare_json("{", "[", &ComparisonOptions::default());
        let message = result.parse_error_message.as_deref().unwrap_or_default();
        assert!(message.starts_with("Both JSON"), "{message}");
        assert!(result
            .diff_lines
            .iter()
            .all(|l| l.kind != ChangeKind::Unchanged));
    }

    #[test]
    fn test_numbers_compare_by_value() {
        let result = compare_json(
            r#"{"a": 1.0, "b": 1e2, "c": -0.0, "d": 2.5}"#,
            r#"{"a": 1, "b": 100, "c": 0, "d": 2.50}"#,
            &ComparisonOptions::default(),
        );
        assert!(result.are_equal);
        assert!(result.differences.is_empty());
        assert_eq!(result.change_count(), 0);

        let changed = compare_json(r#"{"a": 1.5}"#, r#"{"a": 1}"#, &ComparisonOptions::default());
        assert_eq!(changed.differences.len(), 1);
        assert_eq!(changed.differences[0].message, "Value changed at a");
    }

    #[test]
    fn test_canonical_numbers_are_integers() {
        let canonical = canonicalize_json(&parse("[1.0, 3e0, 0.5]"), &ComparisonOptions::default());
        assert_eq!(canonical.to_minified(), "[1,3,0.5]");
        assert_eq!(canonicalize_json(&canonical, &ComparisonOptions::default()), canonical);
    }
}
