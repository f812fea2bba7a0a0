//! Compare command handler.
//!
//! Implements the `compare` subcommand for comparing two documents.

use crate::config::{AppConfig, Validatable};
use crate::model::DocumentFormat;
use crate::pipeline::{exit_code_for, output_report, read_pair, run_comparison};
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// Input format selector, including content-based detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Detect from content: JSON and XML when both sides agree, text otherwise
    #[default]
    Auto,
    Json,
    Xml,
    Text,
}

impl InputFormat {
    /// The explicit document format, or `None` for detection.
    #[must_use]
    pub const fn document_format(self) -> Option<DocumentFormat> {
        match self {
            Self::Auto => None,
            Self::Json => Some(DocumentFormat::Json),
            Self::Xml => Some(DocumentFormat::Xml),
            Self::Text => Some(DocumentFormat::Text),
        }
    }
}

/// Paths and format for one comparison
#[derive(Debug, Clone)]
pub struct CompareRequest {
    /// Left (baseline) document, or `-` for stdin
    pub left: PathBuf,
    /// Right (candidate) document, or `-` for stdin
    pub right: PathBuf,
    /// Format to compare as
    pub format: InputFormat,
}

/// Run the compare command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_compare(request: &CompareRequest, config: &AppConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", details.join("\n  "));
    }

    let (left, right) = read_pair(&request.left, &request.right, config.limits.max_input_bytes)
        .context("Failed to read inputs")?;

    let (result, format) =
        run_comparison(config, &left, &right, request.format.document_format());

    output_report(config, &result, (&left, &right), format)?;

    Ok(exit_code_for(&result, config.behavior.fail_on_change))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::exit_codes;
    use crate::reports::ReportFormat;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn config_for(dir: &Path) -> AppConfig {
        AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(dir.join("report.json")))
            .fail_on_change(true)
            .quiet(true)
            .build()
    }

    #[test]
    fn test_compare_equal_documents() {
        let tmp = TempDir::new().unwrap();
        let request = CompareRequest {
            left: write(tmp.path(), "a.json", r#"{"a": 1, "b": 2}"#),
            right: write(tmp.path(), "b.json", r#"{"a": 1, "b": 2}"#),
            format: InputFormat::Auto,
        };

        let code = run_compare(&request, &config_for(tmp.path())).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let report = std::fs::read_to_string(tmp.path().join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["metadata"]["format"], "json");
        assert_eq!(value["summary"]["are_equal"], true);
    }

    #[test]
    fn test_compare_changes_exit_code() {
        let tmp = TempDir::new().unwrap();
        let request = CompareRequest {
            left: write(tmp.path(), "a.txt", "one\ntwo"),
            right: write(tmp.path(), "b.txt", "one\nthree"),
            format: InputFormat::Text,
        };
        let code = run_compare(&request, &config_for(tmp.path())).unwrap();
        assert_eq!(code, exit_codes::CHANGES_DETECTED);
    }

    #[test]
    fn test_compare_parse_error_exit_code() {
        let tmp = TempDir::new().unwrap();
        let request = CompareRequest {
            left: write(tmp.path(), "a.xml", "<a>"),
            right: write(tmp.path(), "b.xml", "<a/>"),
            format: InputFormat::Xml,
        };
        let code = run_compare(&request, &config_for(tmp.path())).unwrap();
        assert_eq!(code, exit_codes::PARSE_ERROR);
    }

    #[test]
    fn test_compare_rejects_large_input() {
        let tmp = TempDir::new().unwrap();
        let request = CompareRequest {
            left: write(tmp.path(), "a.txt", &"x".repeat(64)),
            right: write(tmp.path(), "b.txt", "x"),
            format: InputFormat::Text,
        };
        let config = AppConfig {
            limits: crate::config::LimitsConfig { max_input_bytes: 16 },
            ..config_for(tmp.path())
        };
        let err = run_compare(&request, &config).unwrap_err();
        assert!(format!("{err:#}").contains("exceeding the 16 byte limit"));
    }

    #[test]
    fn test_compare_rejects_invalid_config() {
        let tmp = TempDir::new().unwrap();
        let request = CompareRequest {
            left: write(tmp.path(), "a.txt", "x"),
            right: write(tmp.path(), "b.txt", "x"),
            format: InputFormat::Auto,
        };
        let config = AppConfig::builder().width(10).build();
        let err = run_compare(&request, &config).unwrap_err();
        assert!(err.to_string().contains("output.width"));
    }

    #[test]
    fn test_input_format_mapping() {
        assert_eq!(InputFormat::Auto.document_format(), None);
        assert_eq!(
            InputFormat::Xml.document_format(),
            Some(DocumentFormat::Xml)
        );
    }
}
