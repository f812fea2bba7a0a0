//! **Structural and textual diff engine for JSON, XML and plain text.**
//!
//! `docdiff` compares two documents and reports what changed, both as a
//! two-column line diff suitable for display and as a list of typed,
//! path-addressed structural differences.
//!
//! Structured documents are canonicalized before comparison, so inputs that
//! differ only in ways the [`ComparisonOptions`] declare irrelevant (key
//! order, array order, attribute order, case, whitespace) compare as equal.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the option, result and document tree types shared by
//!   every comparator, centred on [`CompareResult`].
//! - **[`compare`]**: the [`Comparator`] engine and the JSON, XML and text
//!   comparators.
//! - **[`align`]**: LCS and forward-scan sequence alignment, plus word-level
//!   alignment.
//! - **[`parsers`]**: JSON and XML parsing and content-based format detection.
//! - **[`reports`]**: summary, JSON and side-by-side renderers.
//! - **[`config`]**, **[`pipeline`]**, **[`cli`]**: the command-line layer.
//!
//! ## Getting Started
//!
//! ```
//! use docdiff::{compare_json, ComparisonOptions, DifferenceKind};
//!
//! let opts = ComparisonOptions::default().ignore_key_order(true);
//! let result = compare_json(r#"{"b":1,"a":2}"#, r#"{"a":2,"b":1,"c":3}"#, &opts);
//!
//! assert!(!result.are_equal);
//! assert_eq!(result.differences.len(), 1);
//! assert_eq!(result.differences[0].kind, DifferenceKind::Added);
//! assert_eq!(result.differences[0].path, "c");
//! ```
//!
//! ### Comparing XML
//!
//! ```
//! use docdiff::{compare_xml, ComparisonOptions};
//!
//! let result = compare_xml(
//!     r#"<config><item id="1">a</item></config>"#,
//!     r#"<config><item id="2">a</item></config>"#,
//!     &ComparisonOptions::default(),
//! );
//! assert_eq!(result.differences[0].attribute.as_deref(), Some("id"));
//! ```
//!
//! ### Rendering a report
//!
//! ```
//! use docdiff::reports::{ReportConfig, ReportGenerator, SummaryReporter};
//! use docdiff::{compare_text, ComparisonOptions, TextMode};
//!
//! let result = compare_text("a\nb", "a\nc", &ComparisonOptions::default(), TextMode::Line);
//! let summary = SummaryReporter::new()
//!     .no_color()
//!     .generate(&result, &ReportConfig::default())?;
//! assert!(summary.contains("~1 line modified"));
//! # Ok::<(), docdiff::reports::ReportError>(())
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize/u64 casts for byte counts and similarity ratios
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    // Doc completeness: # Errors / # Panics sections are not written for every fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Option structs legitimately use many bools for toggle flags
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    // Variable names like `left`/`right` or `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod align;
pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use align::{AlignmentStrategy, ScanConfig};
pub use compare::{compare, compare_auto, compare_json, compare_text, compare_xml, Comparator};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigPreset, Validatable};
pub use error::{DocDiffError, ErrorContext, ParseErrorKind, Result};
pub use model::{
    ChangeKind, CompareResult, ComparisonOptions, DiffLine, Difference, DifferenceKind,
    DocumentFormat, JsonValue, TextMode, WordDiff, XmlElement,
};
pub use normalize::normalize;
pub use parsers::{detect_format, parse_json, parse_xml};
pub use reports::{ReportFormat, ReportGenerator};
