//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".docdiff.yaml",
    ".docdiff.yml",
    "docdiff.yaml",
    "docdiff.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/docdiff/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    // 1. Use explicit path if provided
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    // 2. Search current directory
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    // 3. Search git root (if in a repo)
    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    // 4. Search user config directory
    if let Some(path) = dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("docdiff")))
    {
        return Some(path);
    }

    // 5. Search home directory
    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, so a CLI config
    /// built from unset flags leaves file settings alone.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        // Comparison options
        if !other.comparison.case_sensitive {
            self.comparison.case_sensitive = false;
        }
        if other.comparison.ignore_whitespace {
            self.comparison.ignore_whitespace = true;
        }
        if other.comparison.ignore_key_order {
            self.comparison.ignore_key_order = true;
        }
        if other.comparison.ignore_array_order {
            self.comparison.ignore_array_order = true;
        }
        if other.comparison.ignore_attribute_order {
            self.comparison.ignore_attribute_order = true;
        }

        // Alignment config
        if other.alignment.strategy != defaults.alignment.strategy {
            self.alignment.strategy = other.alignment.strategy;
        }
        if other.alignment.text_mode != defaults.alignment.text_mode {
            self.alignment.text_mode = other.alignment.text_mode;
        }
        if other.alignment.scan != defaults.alignment.scan {
            self.alignment.scan = other.alignment.scan;
        }

        // Output config - only override if explicitly set
        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.width != defaults.output.width {
            self.output.width = other.output.width;
        }
        if other.output.only_changes {
            self.output.only_changes = true;
        }

        // Limits
        if other.limits.max_input_bytes != defaults.limits.max_input_bytes {
            self.limits.max_input_bytes = other.limits.max_input_bytes;
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.fail_on_change {
            self.behavior.fail_on_change = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# docdiff configuration
# Place this file at .docdiff.yaml in your project root or ~/.config/docdiff/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# docdiff Configuration File
# ===========================
#
# This file configures docdiff behavior. Place it at:
#   - .docdiff.yaml in your project root
#   - ~/.config/docdiff/docdiff.yaml for global config
#
# CLI arguments always override file settings.

# Equivalence policy
comparison:
  # Compare text case-sensitively
  case_sensitive: true
  # Collapse whitespace runs and trim values
  ignore_whitespace: false
  # Ignore JSON key order and XML child order
  ignore_key_order: false
  # Ignore JSON array element order
  ignore_array_order: false
  # Ignore XML attribute order
  ignore_attribute_order: false

# Alignment (text comparisons only)
alignment:
  # Strategy: lcs, forward-scan
  strategy: lcs
  # Granularity: line, word
  text_mode: line
  # Forward-scan thresholds
  scan:
    lookahead_window: 100
    similarity_sample: 10
    similarity_threshold: 0.1
    tail_guard: 2

# Output configuration
output:
  # Format: auto, side-by-side, json, summary
  format: auto
  # Output file path (omit for stdout)
  # file: report.json
  # Disable colored output
  no_color: false
  # Side-by-side width (at least 40)
  width: 120
  # Only show changed rows in side-by-side output
  only_changes: false

# Input limits
limits:
  # Largest accepted input per side, in bytes
  max_input_bytes: 2097152

# Behavior flags
behavior:
  # Exit with code 1 if documents differ (2 on parse errors)
  fail_on_change: false
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
