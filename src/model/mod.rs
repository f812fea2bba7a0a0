//! Data model shared by every comparator.
//!
//! All values here are created fresh for each comparison and discarded once
//! the caller has consumed the [`CompareResult`].

mod json;
mod options;
mod result;
mod xml;

pub use json::JsonValue;
pub use options::{ComparisonOptions, DocumentFormat, TextMode};
pub use result::{ChangeKind, CompareResult, DiffLine, Difference, DifferenceKind, WordDiff};
pub use xml::XmlElement;
