//! Configuration validation for docdiff.
//!
//! Provides validation traits and implementations for all configuration types.

use super::defaults::MIN_OUTPUT_WIDTH;
use super::types::{AlignmentConfig, AppConfig, LimitsConfig, OutputConfig};
use crate::align::ScanConfig;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.alignment.validate());
        errors.extend(self.output.validate());
        errors.extend(self.limits.validate());
        errors
    }
}

impl Validatable for AlignmentConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.scan.validate()
    }
}

impl Validatable for ScanConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            errors.push(ConfigError::new(
                "alignment.scan.similarity_threshold",
                format!(
                    "Threshold must be between 0.0 and 1.0, got {}",
                    self.similarity_threshold
                ),
            ));
        }
        if self.lookahead_window == 0 {
            errors.push(ConfigError::new(
                "alignment.scan.lookahead_window",
                "Look-ahead window must be greater than 0",
            ));
        }
        if self.similarity_sample == 0 {
            errors.push(ConfigError::new(
                "alignment.scan.similarity_sample",
                "Similarity sample must be greater than 0",
            ));
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.width < MIN_OUTPUT_WIDTH {
            errors.push(ConfigError::new(
                "output.width",
                format!(
                    "Width must be at least {MIN_OUTPUT_WIDTH}, got {}",
                    self.width
                ),
            ));
        }

        // Validate output file path if specified
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for LimitsConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.max_input_bytes == 0 {
            vec![ConfigError::new(
                "limits.max_input_bytes",
                "Input limit must be greater than 0",
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.is_valid(), "{:?}", config.validate());
    }

    #[test]
    fn test_invalid_threshold() {
        let config = AppConfig {
            alignment: AlignmentConfig {
                scan: ScanConfig {
                    similarity_threshold: 1.5,
                    ..ScanConfig::default()
                },
                ..AlignmentConfig::default()
            },
            ..AppConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "alignment.scan.similarity_threshold");
    }

    #[test]
    fn test_zero_windows_and_limits() {
        let scan = ScanConfig {
            lookahead_window: 0,
            similarity_sample: 0,
            ..ScanConfig::default()
        };
        assert_eq!(scan.validate().len(), 2);

        let limits = LimitsConfig { max_input_bytes: 0 };
        assert!(!limits.is_valid());
    }

    #[test]
    fn test_output_width_and_file() {
        let output = OutputConfig {
            width: 20,
            file: Some(PathBuf::from("/nonexistent/dir/report.json")),
            ..OutputConfig::default()
        };
        let errors = output.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].to_string().starts_with("output.width: Width must be at least 40"));
    }
}
