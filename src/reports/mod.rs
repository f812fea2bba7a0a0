//! Report generation for comparison results.
//!
//! This module provides several output formats for a [`CompareResult`]:
//! - Side-by-side: Two-column terminal diff with line numbers
//! - JSON: Structured data for programmatic integration
//! - Summary: Compact shell-friendly output

mod json;
mod sidebyside;
mod summary;
mod types;

pub use json::JsonReporter;
pub use sidebyside::SideBySideReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::model::CompareResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from a comparison result
    fn generate(&self, result: &CompareResult, config: &ReportConfig)
        -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        result: &CompareResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(result, config)?;
        writer.write_all(report.as_bytes())?;
        if !report.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true, None)
}

/// Create a report generator with color and width control.
///
/// `Auto` must be resolved by the caller; it falls back to the summary here.
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
    width: Option<usize>,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::SideBySide => {
            let mut reporter = SideBySideReporter::new();
            if let Some(width) = width {
                reporter = reporter.width(width);
            }
            if use_color {
                Box::new(reporter)
            } else {
                Box::new(reporter.no_colors())
            }
        }
    }
}
