//! Configuration types for docdiff operations.
//!
//! Provides structured configuration for comparisons, alignment, output and
//! input limits.

use crate::align::{AlignmentStrategy, ScanConfig};
use crate::model::{ComparisonOptions, TextMode};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{DEFAULT_MAX_INPUT_BYTES, DEFAULT_OUTPUT_WIDTH};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// This is the top-level configuration struct that aggregates all configuration
/// options. It can be constructed from CLI arguments, config files, or both
/// (with CLI overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Equivalence policy (case, whitespace, ordering)
    pub comparison: ComparisonOptions,
    /// Alignment strategy and text granularity
    pub alignment: AlignmentConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Input size limits
    pub limits: LimitsConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the comparison options.
    pub const fn comparison(mut self, options: ComparisonOptions) -> Self {
        self.config.comparison = options;
        self
    }

    /// Set the alignment strategy.
    pub const fn strategy(mut self, strategy: AlignmentStrategy) -> Self {
        self.config.alignment.strategy = strategy;
        self
    }

    /// Set the text granularity.
    pub const fn text_mode(mut self, mode: TextMode) -> Self {
        self.config.alignment.text_mode = mode;
        self
    }

    /// Set the forward-scan thresholds.
    pub const fn scan(mut self, scan: ScanConfig) -> Self {
        self.config.alignment.scan = scan;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the side-by-side width.
    pub const fn width(mut self, width: usize) -> Self {
        self.config.output.width = width;
        self
    }

    /// Only show changed rows in side-by-side output.
    pub const fn only_changes(mut self, only: bool) -> Self {
        self.config.output.only_changes = only;
        self
    }

    /// Set the per-input size ceiling.
    pub const fn max_input_bytes(mut self, bytes: u64) -> Self {
        self.config.limits.max_input_bytes = bytes;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Alignment configuration.
///
/// `strategy` and `text_mode` only affect text comparisons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Alignment strategy: lcs or forward-scan
    pub strategy: AlignmentStrategy,
    /// Text granularity: line or word
    pub text_mode: TextMode,
    /// Thresholds for the forward-scan strategy
    pub scan: ScanConfig,
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Total width of side-by-side output
    pub width: usize,
    /// Only show changed rows in side-by-side output
    pub only_changes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
            width: DEFAULT_OUTPUT_WIDTH,
            only_changes: false,
        }
    }
}

/// Input limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest accepted input in bytes, per side
    pub max_input_bytes: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

/// Behavior flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with a non-zero code when differences (or parse errors) are found
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}
