//! Cheap content sniffing used to pick a comparator.
//!
//! These checks look only at the first significant characters; they decide
//! which parser to try, not whether the content is well-formed.

use crate::model::DocumentFormat;
use regex::Regex;
use std::sync::LazyLock;

/// An XML declaration, comment/doctype, or an opening tag.
static XML_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<(?:\?xml|!|[A-Za-z_:])").expect("static regex"));

/// Whether the content starts like a JSON object or array.
#[must_use]
pub fn looks_like_json(content: &str) -> bool {
    let trimmed = content.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

/// Whether the content starts like an XML document and not like JSON.
#[must_use]
pub fn looks_like_xml(content: &str) -> bool {
    !looks_like_json(content) && XML_START.is_match(content.trim_start())
}

/// Guess the format of a single document.
#[must_use]
pub fn detect_format(content: &str) -> DocumentFormat {
    if looks_like_json(content) {
        DocumentFormat::Json
    } else if looks_like_xml(content) {
        DocumentFormat::Xml
    } else {
        DocumentFormat::Text
    }
}

/// Pick a format for a pair of documents.
///
/// Both sides must agree; any disagreement falls back to text.
#[must_use]
pub fn detect_pair_format(left: &str, right: &str) -> DocumentFormat {
    match (detect_format(left), detect_format(right)) {
        (DocumentFormat::Json, DocumentFormat::Json) => DocumentFormat::Json,
        (DocumentFormat::Xml, DocumentFormat::Xml) => DocumentFormat::Xml,
        _ => DocumentFormat::Text,
    }
}
