//! Report type definitions.

use crate::model::DocumentFormat;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Auto-detect: side-by-side if TTY, summary otherwise
    #[default]
    Auto,
    /// Two-column terminal diff with line numbers
    #[value(alias = "sbs")]
    SideBySide,
    /// Structured JSON output
    Json,
    /// Brief summary output
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::SideBySide => write!(f, "side-by-side"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Only show changed lines (side-by-side)
    pub only_changes: bool,
    /// Maximum number of differences listed (summary)
    pub max_differences: Option<usize>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    #[must_use]
    pub fn with_metadata(metadata: ReportMetadata) -> Self {
        Self {
            metadata,
            ..Self::default()
        }
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Left document path
    pub left_path: Option<String>,
    /// Right document path
    pub right_path: Option<String>,
    /// Format the documents were compared as
    pub format: Option<DocumentFormat>,
    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_paths(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_path = Some(left.into());
        self.right_path = Some(right.into());
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Display names for both sides, falling back to "left"/"right".
    pub fn names(&self) -> (&str, &str) {
        (
            self.left_path.as_deref().unwrap_or("left"),
            self.right_path.as_deref().unwrap_or("right"),
        )
    }
}
