//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{CompareResult, DifferenceKind};

/// Differences listed before the rest are elided.
const DEFAULT_MAX_DIFFERENCES: usize = 20;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn plural(count: usize) -> &'static str {
    if count == 1 {
        "line"
    } else {
        "lines"
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, result: &CompareResult, config: &ReportConfig) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(
            config.title.as_deref().unwrap_or("Document Comparison Summary"),
            "bold",
        ));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let (left, right) = config.metadata.names();
        lines.push(format!("{}  {} → {}", self.color("Files:", "cyan"), left, right));
        if let Some(format) = config.metadata.format {
            lines.push(format!("{}  {}", self.color("Format:", "cyan"), format));
        }
        lines.push(String::new());

        if result.has_parse_error {
            let message = result
                .parse_error_message
                .as_deref()
                .unwrap_or("input could not be parsed");
            lines.push(format!("{}  {}", self.color("Parse error:", "red"), message));
            return Ok(lines.join("\n"));
        }

        let verdict = if result.are_equal {
            self.color("identical", "green")
        } else {
            self.color("different", "yellow")
        };
        lines.push(format!("{}  {}", self.color("Result:", "cyan"), verdict));
        lines.push(String::new());

        lines.push(self.color("Lines:", "bold"));
        let counts = [
            (result.added_count, '+', "added", "green"),
            (result.removed_count, '-', "removed", "red"),
            (result.modified_count, '~', "modified", "yellow"),
        ];
        for (count, marker, label, color) in counts {
            if count > 0 {
                lines.push(format!(
                    "  {} {} {label}",
                    self.color(&format!("{marker}{count}"), color),
                    plural(count)
                ));
            }
        }
        if result.change_count() == 0 {
            lines.push(format!("  {}", self.color("No changed lines", "dim")));
        }

        if !result.differences.is_empty() {
            lines.push(String::new());
            lines.push(self.color(
                &format!("Differences ({}):", result.differences_count),
                "bold",
            ));

            let limit = config.max_differences.unwrap_or(DEFAULT_MAX_DIFFERENCES);
            for diff in result.differences.iter().take(limit) {
                let (marker, color) = match diff.kind {
                    DifferenceKind::Added => ("+", "green"),
                    DifferenceKind::Removed => ("-", "red"),
                    DifferenceKind::Modified | DifferenceKind::AttributeChanged => ("~", "yellow"),
                };
                let path = if diff.path.is_empty() {
                    "(root)"
                } else {
                    diff.path.as_str()
                };
                lines.push(format!(
                    "  {} {}  {}",
                    self.color(marker, color),
                    path,
                    self.color(&diff.message, "dim")
                ));
            }
            if result.differences.len() > limit {
                lines.push(format!(
                    "  {}",
                    self.color(
                        &format!("… and {} more", result.differences.len() - limit),
                        "dim"
                    )
                ));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
