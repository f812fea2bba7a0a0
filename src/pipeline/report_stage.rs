//! Report output stage.
//!
//! Resolves how a report is presented for its destination, renders it and
//! writes it to stdout or a file.

use crate::config::AppConfig;
use crate::model::{CompareResult, DocumentFormat};
use crate::reports::{create_reporter_with_options, ReportConfig, ReportFormat, ReportMetadata};
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

use super::InputDocument;

/// Where a rendered report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Destination configured by `--output-file`, stdout otherwise.
    #[must_use]
    pub fn for_config(config: &AppConfig) -> Self {
        config
            .output
            .file
            .clone()
            .map_or(Self::Stdout, Self::File)
    }

    /// Stdout attached to a terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }

    /// Concrete report format for this destination.
    ///
    /// `Auto` becomes the side-by-side view on a terminal and the summary
    /// anywhere else.
    #[must_use]
    pub fn resolve_format(&self, requested: ReportFormat) -> ReportFormat {
        match requested {
            ReportFormat::Auto if self.is_terminal() => ReportFormat::SideBySide,
            ReportFormat::Auto => ReportFormat::Summary,
            other => other,
        }
    }

    /// ANSI colors only go to a terminal, and never with `--no-color` or
    /// `NO_COLOR` set.
    #[must_use]
    pub fn wants_color(&self, no_color: bool) -> bool {
        !no_color && std::env::var_os("NO_COLOR").is_none() && self.is_terminal()
    }

    /// Write a rendered report.
    pub fn write(&self, report: &str, quiet: bool) -> Result<()> {
        match self {
            Self::Stdout => println!("{report}"),
            Self::File(path) => {
                std::fs::write(path, report)
                    .with_context(|| format!("Failed to write output to {}", path.display()))?;
                if !quiet {
                    tracing::info!("Report written to {}", path.display());
                }
            }
        }
        Ok(())
    }
}

/// Render a comparison result and write it to the configured destination.
pub fn output_report(
    config: &AppConfig,
    result: &CompareResult,
    inputs: (&InputDocument, &InputDocument),
    format: DocumentFormat,
) -> Result<()> {
    let target = OutputTarget::for_config(config);
    let report = render_report(config, result, inputs, format, &target)?;
    target.write(&report, config.behavior.quiet)
}

/// Render a report for `target` without writing it.
pub fn render_report(
    config: &AppConfig,
    result: &CompareResult,
    inputs: (&InputDocument, &InputDocument),
    format: DocumentFormat,
    target: &OutputTarget,
) -> Result<String> {
    let report_format = target.resolve_format(config.output.format);
    let use_color = target.wants_color(config.output.no_color);

    let report_config = ReportConfig {
        only_changes: config.output.only_changes,
        metadata: ReportMetadata::new()
            .with_paths(inputs.0.name.as_str(), inputs.1.name.as_str())
            .with_format(format),
        ..ReportConfig::default()
    };

    let reporter =
        create_reporter_with_options(report_format, use_color, Some(config.output.width));
    Ok(reporter.generate(result, &report_config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare_json;
    use crate::model::ComparisonOptions;
    use tempfile::TempDir;

    fn inputs() -> (InputDocument, InputDocument) {
        (
            InputDocument::new("a.json", r#"{"x": 1}"#),
            InputDocument::new("b.json", r#"{"x": 2}"#),
        )
    }

    #[test]
    fn test_target_follows_output_file() {
        assert_eq!(
            OutputTarget::for_config(&AppConfig::default()),
            OutputTarget::Stdout
        );

        let config = AppConfig::builder()
            .output_file(Some(PathBuf::from("out.json")))
            .build();
        assert_eq!(
            OutputTarget::for_config(&config),
            OutputTarget::File(PathBuf::from("out.json"))
        );
    }

    #[test]
    fn test_resolve_format() {
        let file = OutputTarget::File(PathBuf::from("out.txt"));
        assert_eq!(file.resolve_format(ReportFormat::Auto), ReportFormat::Summary);
        assert_eq!(file.resolve_format(ReportFormat::Json), ReportFormat::Json);
        assert_eq!(
            OutputTarget::Stdout.resolve_format(ReportFormat::SideBySide),
            ReportFormat::SideBySide
        );
    }

    #[test]
    fn test_no_color_for_files_or_flag() {
        assert!(!OutputTarget::File(PathBuf::from("out.txt")).wants_color(false));
        assert!(!OutputTarget::Stdout.wants_color(true));
    }

    #[test]
    fn test_write_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.txt");
        OutputTarget::File(path.clone()).write("content", true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "content");
    }

    #[test]
    fn test_file_target_renders_plain_summary() {
        let config = AppConfig::default();
        let (left, right) = inputs();
        let result = compare_json(&left.content, &right.content, &ComparisonOptions::default());
        let target = OutputTarget::File(PathBuf::from("out.txt"));

        let report =
            render_report(&config, &result, (&left, &right), DocumentFormat::Json, &target).unwrap();
        assert!(report.starts_with("Document Comparison Summary"));
        assert!(report.contains("a.json → b.json"));
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn test_output_report_writes_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(path.clone()))
            .quiet(true)
            .build();
        let (left, right) = inputs();
        let result = compare_json(&left.content, &right.content, &ComparisonOptions::default());

        output_report(&config, &result, (&left, &right), DocumentFormat::Json).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["summary"]["are_equal"], false);
        assert_eq!(value["metadata"]["format"], "json");
    }
}
