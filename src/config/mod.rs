//! Configuration module for docdiff.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```
//! use docdiff::config::{AppConfig, ConfigPreset, Validatable};
//! use docdiff::ReportFormat;
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Lenient);
//! assert!(config.comparison.ignore_key_order);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .output_format(ReportFormat::Json)
//!     .fail_on_change(true)
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.docdiff.yaml` file in your project root or `~/.config/docdiff/`:
//!
//! ```yaml
//! comparison:
//!   ignore_key_order: true
//!   ignore_whitespace: true
//! behavior:
//!   fail_on_change: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{ConfigPreset, DEFAULT_MAX_INPUT_BYTES, DEFAULT_OUTPUT_WIDTH, MIN_OUTPUT_WIDTH};
pub use types::{
    AlignmentConfig, AppConfig, AppConfigBuilder, BehaviorConfig, LimitsConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.docdiff.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
