//! Comparison engine for JSON, XML and plain text documents.
//!
//! Every entry point is a pure function of its inputs: no I/O, no shared
//! state, and no error return. Parse failures come back as a
//! [`CompareResult`] with `has_parse_error` set so callers can still render
//! the raw text side by side.
//!
//! # Example
//!
//! ```
//! use docdiff::compare::Comparator;
//! use docdiff::{ComparisonOptions, DocumentFormat};
//!
//! let opts = ComparisonOptions::default().ignore_key_order(true);
//! let result = Comparator::new().compare(
//!     r#"{"b": 1, "a": 2}"#,
//!     r#"{"a": 2, "b": 1, "c": 3}"#,
//!     &opts,
//!     DocumentFormat::Json,
//! );
//!
//! assert!(!result.are_equal);
//! assert_eq!(result.differences[0].path, "c");
//! ```

mod json;
mod lines;
mod text;
mod xml;
mod xml_lines;

pub use json::{canonicalize_json, compare_json, diff_json};
pub use text::{compare_text, compare_text_with};
pub use xml::{
    canonicalize_xml, compare_xml, diff_xml_elements, serialize_xml, serialize_xml_lines, XmlLine,
    XmlLineKind,
};

use crate::align::{AlignmentStrategy, ScanConfig};
use crate::error::ParseErrorKind;
use crate::model::{CompareResult, ComparisonOptions, DocumentFormat, TextMode};
use crate::parsers::detect_pair_format;
use tracing::debug;

/// Configured comparison engine.
///
/// The alignment strategy and text mode only affect text comparisons; JSON
/// and XML always align their canonical output with LCS.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    strategy: AlignmentStrategy,
    scan_config: ScanConfig,
    text_mode: TextMode,
}

impl Comparator {
    /// Create a comparator with LCS alignment and line mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alignment strategy used for text
    #[must_use]
    pub const fn with_strategy(mut self, strategy: AlignmentStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the forward-scan thresholds
    #[must_use]
    pub const fn with_scan_config(mut self, config: ScanConfig) -> Self {
        self.scan_config = config;
        self
    }

    /// Set line or word granularity for text
    #[must_use]
    pub const fn with_text_mode(mut self, mode: TextMode) -> Self {
        self.text_mode = mode;
        self
    }

    #[must_use]
    pub const fn strategy(&self) -> AlignmentStrategy {
        self.strategy
    }

    #[must_use]
    pub const fn text_mode(&self) -> TextMode {
        self.text_mode
    }

    pub fn compare_json(&self, left: &str, right: &str, opts: &ComparisonOptions) -> CompareResult {
        compare_json(left, right, opts)
    }

    pub fn compare_xml(&self, left: &str, right: &str, opts: &ComparisonOptions) -> CompareResult {
        compare_xml(left, right, opts)
    }

    pub fn compare_text(&self, left: &str, right: &str, opts: &ComparisonOptions) -> CompareResult {
        compare_text_with(
            left,
            right,
            opts,
            self.text_mode,
            self.strategy,
            &self.scan_config,
        )
    }

    /// Compare two documents of a known format.
    pub fn compare(
        &self,
        left: &str,
        right: &str,
        opts: &ComparisonOptions,
        format: DocumentFormat,
    ) -> CompareResult {
        debug!(%format, strategy = %self.strategy, "comparing documents");
        match format {
            DocumentFormat::Json => self.compare_json(left, right, opts),
            DocumentFormat::Xml => self.compare_xml(left, right, opts),
            DocumentFormat::Text => self.compare_text(left, right, opts),
        }
    }

    /// Compare two documents, detecting their format from content.
    ///
    /// Both sides must look like JSON (or both like XML) to be compared
    /// structurally; anything else is compared as text.
    pub fn compare_auto(&self, left: &str, right: &str, opts: &ComparisonOptions) -> CompareResult {
        let format = detect_pair_format(left, right);
        debug!(%format, "detected document format");
        self.compare(left, right, opts, format)
    }
}

/// Compare two documents of a known format with a default [`Comparator`].
pub fn compare(
    left: &str,
    right: &str,
    opts: &ComparisonOptions,
    format: DocumentFormat,
) -> CompareResult {
    Comparator::new().compare(left, right, opts, format)
}

/// Compare two documents of unknown format with a default [`Comparator`].
pub fn compare_auto(left: &str, right: &str, opts: &ComparisonOptions) -> CompareResult {
    Comparator::new().compare_auto(left, right, opts)
}

/// Message naming which side(s) failed to parse.
fn parse_failure_message(
    format: DocumentFormat,
    left: Option<&ParseErrorKind>,
    right: Option<&ParseErrorKind>,
) -> String {
    match (left, right) {
        (Some(l), Some(r)) => format!("Both {format} inputs are invalid (left: {l}; right: {r})"),
        (Some(l), None) => format!("Left {format} is invalid: {l}"),
        (None, Some(r)) => format!("Right {format} is invalid: {r}"),
        (None, None) => format!("{format} inputs could not be compared"),
    }
}
