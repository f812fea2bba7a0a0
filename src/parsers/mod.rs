//! Document parsers.
//!
//! JSON goes through `serde_json` (with `preserve_order`, so object keys keep
//! their source order) into a [`JsonValue`](crate::model::JsonValue). XML is
//! read with the `quick-xml` event reader into an
//! [`XmlElement`](crate::model::XmlElement) tree. Plain text needs no parser.
//!
//! ## Usage
//!
//! ```
//! use docdiff::parsers::{detect_format, parse_json};
//! use docdiff::DocumentFormat;
//!
//! assert_eq!(detect_format(r#"{"a": 1}"#), DocumentFormat::Json);
//! let value = parse_json(r#"{"a": 1}"#).unwrap();
//! assert_eq!(value.type_name(), "object");
//! ```

mod detection;
mod json;
mod xml;

pub use detection::{detect_format, detect_pair_format, looks_like_json, looks_like_xml};
pub use json::parse_json;
pub use xml::parse_xml;
