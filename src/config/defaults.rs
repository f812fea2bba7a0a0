//! Default configurations and presets for docdiff.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::model::ComparisonOptions;
use crate::reports::ReportFormat;

// ============================================================================
// Default Values
// ============================================================================

/// Largest input accepted per side (2 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 2 * 1024 * 1024;

/// Default width of side-by-side output.
pub const DEFAULT_OUTPUT_WIDTH: usize = 120;

/// Narrowest side-by-side width accepted by validation.
pub const MIN_OUTPUT_WIDTH: usize = 40;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default settings: strict comparison, auto output
    Default,
    /// Strict: every difference counts, including ordering and case
    Strict,
    /// Lenient: ignore case, whitespace and every kind of ordering
    Lenient,
    /// CI/CD: machine-readable output, fail on changes
    CiCd,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Lenient => "lenient",
            Self::CiCd => "ci-cd",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "strict" | "exact" => Some(Self::Strict),
            "lenient" | "loose" | "semantic" => Some(Self::Lenient),
            "ci-cd" | "ci" | "cd" | "pipeline" => Some(Self::CiCd),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Strict comparison with automatic output selection",
            Self::Strict => "Case, whitespace and ordering differences all count",
            Self::Lenient => "Semantic comparison ignoring case, whitespace and ordering",
            Self::CiCd => "JSON output and a failing exit code when documents differ",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Lenient, Self::CiCd]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::strict_preset(),
            ConfigPreset::Lenient => Self::lenient_preset(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
        }
    }

    /// Strict preset.
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            comparison: ComparisonOptions::strict(),
            ..Self::default()
        }
    }

    /// Lenient preset.
    ///
    /// - Case-insensitive
    /// - Whitespace collapsed
    /// - Key, array and attribute order ignored
    #[must_use]
    pub fn lenient_preset() -> Self {
        Self {
            comparison: ComparisonOptions::lenient(),
            ..Self::default()
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Fail on any changes
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                fail_on_change: true,
                quiet: true,
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
            assert!(!preset.description().is_empty());
        }
        assert_eq!(ConfigPreset::from_name("LOOSE"), Some(ConfigPreset::Lenient));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_lenient_preset() {
        let config = AppConfig::from_preset(ConfigPreset::Lenient);
        assert!(!config.comparison.case_sensitive);
        assert!(config.comparison.ignore_array_order);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_ci_cd_preset() {
        let config = AppConfig::from_preset(ConfigPreset::CiCd);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.behavior.fail_on_change);
        assert!(config.behavior.quiet);
        assert_eq!(config.limits.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }
}
