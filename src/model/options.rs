//! Comparison options and format selectors.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Equivalence policy applied to both inputs of a comparison.
///
/// XML reuses `ignore_key_order` for child element order; attribute order is
/// ignored when either `ignore_attribute_order` or `ignore_key_order` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ComparisonOptions {
    /// Compare text case-sensitively
    pub case_sensitive: bool,
    /// Collapse whitespace runs and trim values before comparing
    pub ignore_whitespace: bool,
    /// Ignore JSON object key order / XML child and attribute order
    pub ignore_key_order: bool,
    /// Ignore JSON array element order
    pub ignore_array_order: bool,
    /// Ignore XML attribute order
    pub ignore_attribute_order: bool,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            ignore_whitespace: false,
            ignore_key_order: false,
            ignore_array_order: false,
            ignore_attribute_order: false,
        }
    }
}

impl ComparisonOptions {
    /// Strict comparison: case-sensitive, nothing ignored.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient comparison: case-insensitive, every ordering and whitespace ignored.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            case_sensitive: false,
            ignore_whitespace: true,
            ignore_key_order: true,
            ignore_array_order: true,
            ignore_attribute_order: true,
        }
    }

    #[must_use]
    pub const fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    #[must_use]
    pub const fn ignore_whitespace(mut self, value: bool) -> Self {
        self.ignore_whitespace = value;
        self
    }

    #[must_use]
    pub const fn ignore_key_order(mut self, value: bool) -> Self {
        self.ignore_key_order = value;
        self
    }

    #[must_use]
    pub const fn ignore_array_order(mut self, value: bool) -> Self {
        self.ignore_array_order = value;
        self
    }

    #[must_use]
    pub const fn ignore_attribute_order(mut self, value: bool) -> Self {
        self.ignore_attribute_order = value;
        self
    }

    /// Whether XML attribute order is irrelevant under these options.
    #[must_use]
    pub const fn ignores_attribute_order(&self) -> bool {
        self.ignore_attribute_order || self.ignore_key_order
    }
}

/// Kind of document being compared.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Xml,
    #[default]
    Text,
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Xml => write!(f, "XML"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Granularity of a text comparison.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    /// Align whole lines
    #[default]
    Line,
    /// Align lines, then words within each paired line
    Word,
}
