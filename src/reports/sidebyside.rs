//! Side-by-side diff output similar to difftastic.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::config::{DEFAULT_OUTPUT_WIDTH, MIN_OUTPUT_WIDTH};
use crate::model::{ChangeKind, CompareResult, DiffLine, WordDiff};
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// ANSI color codes
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const LINE_NUM: &str = "\x1b[38;5;242m"; // Gray for line numbers
}

/// Line number gutter: four digits plus a space.
const NUM_WIDTH: usize = 4;
/// Gutter plus the change marker and its trailing space.
const GUTTER_WIDTH: usize = NUM_WIDTH + 3;

/// Side-by-side diff reporter
pub struct SideBySideReporter {
    /// Total output width in columns
    width: usize,
    /// Show line numbers
    show_line_numbers: bool,
    /// Use colors
    use_colors: bool,
}

impl SideBySideReporter {
    /// Create a new side-by-side reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: DEFAULT_OUTPUT_WIDTH,
            show_line_numbers: true,
            use_colors: true,
        }
    }

    /// Set terminal width
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = if width < MIN_OUTPUT_WIDTH {
            MIN_OUTPUT_WIDTH
        } else {
            width
        };
        self
    }

    /// Hide the line number gutter
    #[must_use]
    pub const fn without_line_numbers(mut self) -> Self {
        self.show_line_numbers = false;
        self
    }

    /// Disable colors
    #[must_use]
    pub const fn no_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    const fn col(&self, code: &'static str) -> &'static str {
        if self.use_colors {
            code
        } else {
            ""
        }
    }

    const fn half_width(&self) -> usize {
        (self.width - 3) / 2
    }

    const fn text_width(&self) -> usize {
        if self.show_line_numbers {
            self.half_width() - GUTTER_WIDTH
        } else {
            self.half_width() - 2
        }
    }

    fn format_header(&self, left_name: &str, right_name: &str) -> String {
        let half_width = self.half_width();
        format!(
            "{}{}{} │ {}{}{}\n",
            self.col(colors::BOLD),
            pad(&truncate(left_name, half_width), half_width),
            self.col(colors::RESET),
            self.col(colors::BOLD),
            truncate(right_name, half_width),
            self.col(colors::RESET),
        )
    }

    fn format_separator(&self) -> String {
        let half_width = self.half_width();
        format!(
            "{}{}┼{}{}\n",
            self.col(colors::DIM),
            "─".repeat(half_width + 1),
            "─".repeat(half_width + 1),
            self.col(colors::RESET)
        )
    }

    /// Color for one side of a row; unchanged rows stay plain.
    const fn side_color(&self, kind: ChangeKind, present: bool) -> &'static str {
        if !present {
            return "";
        }
        match kind {
            ChangeKind::Unchanged => "",
            ChangeKind::Added => self.col(colors::GREEN),
            ChangeKind::Removed => self.col(colors::RED),
            ChangeKind::Modified => self.col(colors::YELLOW),
        }
    }

    fn format_cell(
        &self,
        number: Option<usize>,
        text: Option<&str>,
        words: Option<&[WordDiff]>,
        kind: ChangeKind,
    ) -> String {
        let mut cell = String::new();
        let color = self.side_color(kind, text.is_some());

        if self.show_line_numbers {
            let num = number.map_or_else(String::new, |n| n.to_string());
            cell.push_str(self.col(colors::LINE_NUM));
            let _ = write!(cell, "{num:>width$}", width = NUM_WIDTH);
            cell.push_str(self.col(colors::RESET));
            cell.push(' ');
        }

        let marker = if text.is_some() { kind.marker() } else { ' ' };
        cell.push_str(color);
        cell.push(marker);
        cell.push(' ');

        let text_width = self.text_width();
        let body = match (text, words) {
            (Some(_), Some(words)) if self.use_colors && kind.is_change() => {
                cell.push_str(self.col(colors::RESET));
                self.render_words(words, text_width)
            }
            (Some(text), _) => pad(&truncate(&expand_tabs(text), text_width), text_width),
            (None, _) => " ".repeat(text_width),
        };
        cell.push_str(&body);
        if !color.is_empty() {
            cell.push_str(self.col(colors::RESET));
        }
        cell
    }

    /// Render words with changed ones highlighted, fitting `width` columns.
    fn render_words(&self, words: &[WordDiff], width: usize) -> String {
        let mut out = String::new();
        let mut used = 0;

        for (index, word) in words.iter().enumerate() {
            let separator = usize::from(index > 0);
            let available = width.saturating_sub(used + separator);
            if available == 0 {
                break;
            }
            let text = truncate(&expand_tabs(&word.word), available);
            if separator == 1 {
                out.push(' ');
            }
            let color = match word.kind {
                ChangeKind::Added => colors::GREEN,
                ChangeKind::Removed => colors::RED,
                ChangeKind::Modified => colors::YELLOW,
                ChangeKind::Unchanged => "",
            };
            if color.is_empty() {
                out.push_str(&text);
            } else {
                let _ = write!(out, "{}{color}{text}{}", colors::BOLD, colors::RESET);
            }
            used += separator + text.width();
        }

        out.push_str(&" ".repeat(width.saturating_sub(used)));
        out
    }

    fn format_row(&self, line: &DiffLine) -> String {
        let left = self.format_cell(
            line.left_line_number,
            line.left.as_deref(),
            line.left_words.as_deref(),
            line.kind,
        );
        let right = self.format_cell(
            line.right_line_number,
            line.right.as_deref(),
            line.right_words.as_deref(),
            line.kind,
        );
        format!(
            "{left} {}│{} {}\n",
            self.col(colors::DIM),
            self.col(colors::RESET),
            right.trim_end()
        )
    }

    fn format_footer(&self, result: &CompareResult) -> String {
        if result.are_equal {
            return format!(
                "\n{}Documents are identical{}\n",
                self.col(colors::GREEN),
                self.col(colors::RESET)
            );
        }
        format!(
            "\n{}+{} added{}  {}-{} removed{}  {}~{} modified{}  {}{} difference(s){}\n",
            self.col(colors::GREEN),
            result.added_count,
            self.col(colors::RESET),
            self.col(colors::RED),
            result.removed_count,
            self.col(colors::RESET),
            self.col(colors::YELLOW),
            result.modified_count,
            self.col(colors::RESET),
            self.col(colors::DIM),
            result.differences_count,
            self.col(colors::RESET),
        )
    }
}

impl Default for SideBySideReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SideBySideReporter {
    fn generate(&self, result: &CompareResult, config: &ReportConfig) -> Result<String, ReportError> {
        let mut out = String::new();
        let (left_name, right_name) = config.metadata.names();

        match config.metadata.format {
            Some(format) => writeln!(
                out,
                "{}docdiff{} --- {}",
                self.col(colors::CYAN),
                self.col(colors::RESET),
                format
            )?,
            None => writeln!(out, "{}docdiff{}", self.col(colors::CYAN), self.col(colors::RESET))?,
        }

        if let Some(message) = result.parse_error_message.as_deref() {
            writeln!(
                out,
                "{}Parse error:{} {}",
                self.col(colors::RED),
                self.col(colors::RESET),
                message
            )?;
        }

        out.push_str(&self.format_header(left_name, right_name));
        out.push_str(&self.format_separator());

        for line in &result.diff_lines {
            if config.only_changes && !line.kind.is_change() {
                continue;
            }
            out.push_str(&self.format_row(line));
        }

        out.push_str(&self.format_footer(result));
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::SideBySide
    }
}

/// Replace tabs so column math stays predictable.
fn expand_tabs(s: &str) -> String {
    s.replace('\t', "    ")
}

/// Truncate string to fit `max_width` display columns.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pad string with spaces to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(strip_ansi(s).width())));
    out
}

/// Strip ANSI escape codes for width calculation
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            result.push(c);
        }
    }

    result
}
