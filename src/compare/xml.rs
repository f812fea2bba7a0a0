//! XML canonicalization, serialization and structural comparison.

use super::lines::exact_line_diff;
use super::parse_failure_message;
use super::xml_lines::reconcile_lines;
use crate::error::ParseErrorKind;
use crate::model::{
    CompareResult, ComparisonOptions, Difference, DifferenceKind, DocumentFormat, XmlElement,
};
use crate::normalize::{normalize, normalize_case};
use crate::parsers::{looks_like_xml, parse_xml};
use indexmap::IndexMap;
use quick_xml::escape::{escape, partial_escape};
use tracing::{debug, warn};

const INDENT: &str = "  ";

/// Compare two XML texts.
///
/// Content that does not look like XML, or that is not well-formed, is
/// reported through `has_parse_error`.
pub fn compare_xml(left: &str, right: &str, opts: &ComparisonOptions) -> CompareResult {
    let (left_root, right_root) = match (parse_side(left), parse_side(right)) {
        (Ok(l), Ok(r)) => (l, r),
        (l, r) => {
            let message =
                parse_failure_message(DocumentFormat::Xml, l.as_ref().err(), r.as_ref().err());
            warn!("{message}");
            return CompareResult::parse_error(message, exact_line_diff(left, right));
        }
    };

    let left_canonical = canonicalize_xml(&left_root, opts);
    let right_canonical = canonicalize_xml(&right_root, opts);

    let mut differences = Vec::new();
    diff_xml_elements(
        Some(&left_canonical),
        Some(&right_canonical),
        &format!("/{}", left_canonical.tag),
        opts,
        &mut differences,
    );

    let left_lines = serialize_xml_lines(&left_canonical);
    let right_lines = serialize_xml_lines(&right_canonical);
    let diff_lines = reconcile_lines(
        &left_lines,
        &right_lines,
        &differences,
        opts,
        (left, right),
    );

    let are_equal = differences.is_empty()
        && left_lines.len() == right_lines.len()
        && left_lines.iter().zip(&right_lines).all(|(l, r)| l.text == r.text);

    debug!(
        left_elements = left_canonical.element_count(),
        right_elements = right_canonical.element_count(),
        differences = differences.len(),
        are_equal,
        "XML comparison complete"
    );
    CompareResult::new(are_equal, diff_lines, differences)
}

fn parse_side(content: &str) -> Result<XmlElement, ParseErrorKind> {
    if content.trim().is_empty() {
        return Err(ParseErrorKind::EmptyDocument);
    }
    if !looks_like_xml(content) {
        return Err(ParseErrorKind::NotXml);
    }
    parse_xml(content)
}

// ============================================================================
// Canonicalization
// ============================================================================

/// Build the canonical form of an element tree under `opts`.
///
/// Tags are case-normalized, attribute keys and values and text go through
/// the normalizer, and attributes are sorted when attribute order is ignored.
/// Children are stably sorted by tag when `ignore_key_order` is set. The
/// input tree is never modified.
#[must_use]
pub fn canonicalize_xml(element: &XmlElement, opts: &ComparisonOptions) -> XmlElement {
    let mut attributes: IndexMap<String, String> = IndexMap::with_capacity(element.attributes.len());
    for (key, value) in &element.attributes {
        let key = normalize(key, opts);
        if !attributes.contains_key(&key) {
            attributes.insert(key, normalize(value, opts));
        }
    }
    if opts.ignores_attribute_order() {
        attributes.sort_keys();
    }

    let mut children: Vec<XmlElement> = element
        .children
        .iter()
        .map(|child| canonicalize_xml(child, opts))
        .collect();
    if opts.ignore_key_order {
        children.sort_by(|a, b| a.tag.cmp(&b.tag));
    }

    XmlElement {
        tag: normalize_case(&element.tag, opts),
        attributes,
        children,
        text: element
            .text
            .as_deref()
            .map(|t| normalize(t, opts))
            .filter(|t| !t.trim().is_empty()),
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Role of a serialized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XmlLineKind {
    /// Opening, self-closing or single-line `<a>text</a>` element
    Open,
    /// Closing tag of an element with children
    Close,
    /// Own text of an element with children
    Text,
}

/// One line of deterministic XML output, with provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlLine {
    pub text: String,
    /// Element path, `/root/child[k]` where k counts same-tag siblings
    pub path: String,
    pub tag: String,
    pub kind: XmlLineKind,
    /// Own text of the element the line belongs to
    pub inner_text: Option<String>,
}

/// Serialize an element tree as 2-space indented XML.
#[must_use]
pub fn serialize_xml(element: &XmlElement) -> String {
    serialize_xml_lines(element)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize an element tree into lines that remember their element.
#[must_use]
pub fn serialize_xml_lines(element: &XmlElement) -> Vec<XmlLine> {
    let mut lines = Vec::new();
    emit_element(element, &format!("/{}", element.tag), 0, &mut lines);
    lines
}

fn emit_element(element: &XmlElement, path: &str, depth: usize, out: &mut Vec<XmlLine>) {
    let indent = INDENT.repeat(depth);
    let mut open_tag = format!("<{}", element.tag);
    for (key, value) in &element.attributes {
        open_tag.push_str(&format!(" {key}=\"{}\"", attribute_value(value)));
    }

    let line = |text: String, kind: XmlLineKind| XmlLine {
        text,
        path: path.to_string(),
        tag: element.tag.clone(),
        kind,
        inner_text: element.text.clone(),
    };

    match (&element.text, element.children.is_empty()) {
        (None, true) => out.push(line(format!("{indent}{open_tag}/>"), XmlLineKind::Open)),
        (Some(text), true) => {
            // Multi-line text continues on its own lines; the last one closes the tag.
            let pieces = text_lines(text);
            let last = pieces.len() - 1;
            for (index, piece) in pieces.iter().enumerate() {
                let (prefix, kind) = if index == 0 {
                    (format!("{indent}{open_tag}>"), XmlLineKind::Open)
                } else {
                    (format!("{indent}{INDENT}"), XmlLineKind::Text)
                };
                let suffix = if index == last {
                    format!("</{}>", element.tag)
                } else {
                    String::new()
                };
                out.push(line(format!("{prefix}{piece}{suffix}"), kind));
            }
        }
        (text, false) => {
            out.push(line(format!("{indent}{open_tag}>"), XmlLineKind::Open));
            if let Some(text) = text {
                for piece in text_lines(text) {
                    out.push(line(format!("{indent}{INDENT}{piece}"), XmlLineKind::Text));
                }
            }
            for (child, child_path) in element.children.iter().zip(child_paths(path, &element.children)) {
                emit_element(child, &child_path, depth + 1, out);
            }
            out.push(line(format!("{indent}</{}>", element.tag), XmlLineKind::Close));
        }
    }
}

/// Escaped attribute value with line breaks kept as character references.
fn attribute_value(value: &str) -> String {
    escape(value)
        .replace('\r', "&#13;")
        .replace('\n', "&#10;")
}

/// Escaped element text, one entry per physical line.
///
/// Single-line text is kept as is. Multi-line text is trimmed per line and
/// blank lines are dropped. Never empty.
fn text_lines(text: &str) -> Vec<String> {
    if !text.contains('\n') {
        return vec![partial_escape(text).into_owned()];
    }
    let pieces: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| partial_escape(piece).into_owned())
        .collect();
    if pieces.is_empty() {
        vec![String::new()]
    } else {
        pieces
    }
}

/// Paths of `children`, indexed among same-tag siblings.
fn child_paths(parent: &str, children: &[XmlElement]) -> Vec<String> {
    let mut seen: IndexMap<&str, usize> = IndexMap::new();
    children
        .iter()
        .map(|child| {
            let index = seen.entry(child.tag.as_str()).or_insert(0);
            let path = format!("{parent}/{}[{index}]", child.tag);
            *index += 1;
            path
        })
        .collect()
}

// ============================================================================
// Structural walk
// ============================================================================

/// Walk two canonical trees and record every structural difference.
///
/// An element on one side only is reported together with its whole subtree.
/// A renamed element is reported once and not descended into.
pub fn diff_xml_elements(
    left: Option<&XmlElement>,
    right: Option<&XmlElement>,
    path: &str,
    opts: &ComparisonOptions,
    out: &mut Vec<Difference>,
) {
    match (left, right) {
        (None, None) => {}
        (None, Some(added)) => report_subtree(added, path, DifferenceKind::Added, out),
        (Some(removed), None) => report_subtree(removed, path, DifferenceKind::Removed, out),
        (Some(l), Some(r)) if l.tag != r.tag => out.push(
            Difference::new(
                DifferenceKind::Modified,
                path,
                format!("Element <{}> renamed to <{}>", l.tag, r.tag),
            )
            .with_element(l.tag.as_str())
            .with_old_value(l.tag.as_str())
            .with_new_value(r.tag.as_str()),
        ),
        (Some(l), Some(r)) => {
            diff_attributes(l, r, path, opts, out);

            if l.text != r.text {
                out.push(
                    Difference::new(
                        DifferenceKind::Modified,
                        path,
                        format!("Text of <{}> changed", l.tag),
                    )
                    .with_element(l.tag.as_str())
                    .with_old_value(l.text.clone())
                    .with_new_value(r.text.clone()),
                );
            }

            if opts.ignore_key_order {
                diff_children_by_tag(l, r, path, opts, out);
            } else {
                diff_children_by_position(l, r, path, opts, out);
            }
        }
    }
}

fn report_subtree(
    element: &XmlElement,
    path: &str,
    kind: DifferenceKind,
    out: &mut Vec<Difference>,
) {
    let verb = if kind == DifferenceKind::Added {
        "added"
    } else {
        "removed"
    };
    out.push(
        Difference::new(kind, path, format!("Element <{}> {verb}", element.tag))
            .with_element(element.tag.as_str()),
    );
    for (child, child_path) in element
        .children
        .iter()
        .zip(child_paths(path, &element.children))
    {
        report_subtree(child, &child_path, kind, out);
    }
}

fn diff_attributes(
    left: &XmlElement,
    right: &XmlElement,
    path: &str,
    opts: &ComparisonOptions,
    out: &mut Vec<Difference>,
) {
    let same_set = left.attributes.len() == right.attributes.len()
        && left.attributes.keys().all(|k| right.attributes.contains_key(k));
    let same_order = left.attributes.keys().eq(right.attributes.keys());

    if same_set && !same_order && !opts.ignores_attribute_order() {
        let order = |e: &XmlElement| e.attributes.keys().cloned().collect::<Vec<_>>();
        out.push(
            Difference::new(
                DifferenceKind::AttributeChanged,
                path,
                format!("Attribute order of <{}> changed", left.tag),
            )
            .with_element(left.tag.as_str())
            .with_attribute("attribute_order")
            .with_old_value(order(left))
            .with_new_value(order(right)),
        );
    }

    for (key, old) in &left.attributes {
        match right.attributes.get(key) {
            None => out.push(
                Difference::new(
                    DifferenceKind::Removed,
                    path,
                    format!("Attribute '{key}' removed from <{}>", left.tag),
                )
                .with_element(left.tag.as_str())
                .with_attribute(key.as_str())
                .with_old_value(old.as_str()),
            ),
            Some(new) if new != old => out.push(
                Difference::new(
                    DifferenceKind::AttributeChanged,
                    path,
                    format!("Attribute '{key}' of <{}> changed", left.tag),
                )
                .with_element(left.tag.as_str())
                .with_attribute(key.as_str())
                .with_old_value(old.as_str())
                .with_new_value(new.as_str()),
            ),
            Some(_) => {}
        }
    }

    for (key, new) in &right.attributes {
        if !left.attributes.contains_key(key) {
            out.push(
                Difference::new(
                    DifferenceKind::Added,
                    path,
                    format!("Attribute '{key}' added to <{}>", right.tag),
                )
                .with_element(right.tag.as_str())
                .with_attribute(key.as_str())
                .with_new_value(new.as_str()),
            );
        }
    }
}

/// Pair children position-wise within same-tag buckets.
fn diff_children_by_tag(
    left: &XmlElement,
    right: &XmlElement,
    path: &str,
    opts: &ComparisonOptions,
    out: &mut Vec<Difference>,
) {
    let mut buckets: IndexMap<&str, (Vec<&XmlElement>, Vec<&XmlElement>)> = IndexMap::new();
    for child in &left.children {
        buckets.entry(child.tag.as_str()).or_default().0.push(child);
    }
    for child in &right.children {
        buckets.entry(child.tag.as_str()).or_default().1.push(child);
    }

    for (tag, (lefts, rights)) in &buckets {
        for index in 0..lefts.len().max(rights.len()) {
            diff_xml_elements(
                lefts.get(index).copied(),
                rights.get(index).copied(),
                &format!("{path}/{tag}[{index}]"),
                opts,
                out,
            );
        }
    }
}

/// Pair children by raw position.
fn diff_children_by_position(
    left: &XmlElement,
    right: &XmlElement,
    path: &str,
    opts: &ComparisonOptions,
    out: &mut Vec<Difference>,
) {
    let left_paths = child_paths(path, &left.children);
    let right_paths = child_paths(path, &right.children);

    for index in 0..left.children.len().max(right.children.len()) {
        let child_path = left_paths
            .get(index)
            .or_else(|| right_paths.get(index))
            .map_or_else(|| format!("{path}/[{index}]"), Clone::clone);
        diff_xml_elements(
            left.children.get(index),
            right.children.get(index),
            &child_path,
            opts,
            out,
        );
    }
}
