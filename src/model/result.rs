//! Comparison result structures.

use serde::{Deserialize, Serialize};

/// Classification of an aligned line or word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Unchanged,
    Added,
    Removed,
    Modified,
}

impl ChangeKind {
    #[must_use]
    pub const fn is_change(self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// Single-character marker used in terminal output.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Unchanged => ' ',
            Self::Added => '+',
            Self::Removed => '-',
            Self::Modified => '~',
        }
    }
}

/// One word of a word-level diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiff {
    pub word: String,
    pub kind: ChangeKind,
}

impl WordDiff {
    pub fn new(word: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            word: word.into(),
            kind,
        }
    }
}

/// One row of the rendered two-column diff.
///
/// At least one of `left`/`right` is present. Line numbers on each side are
/// independent; `display_line_number` follows the merged order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub display_line_number: usize,
    pub left_line_number: Option<usize>,
    pub right_line_number: Option<usize>,
    pub left: Option<String>,
    pub right: Option<String>,
    pub kind: ChangeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_words: Option<Vec<WordDiff>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_words: Option<Vec<WordDiff>>,
}

impl DiffLine {
    /// Line present on both sides.
    pub fn paired(
        kind: ChangeKind,
        left: (usize, impl Into<String>),
        right: (usize, impl Into<String>),
    ) -> Self {
        Self {
            display_line_number: 0,
            left_line_number: Some(left.0),
            right_line_number: Some(right.0),
            left: Some(left.1.into()),
            right: Some(right.1.into()),
            kind,
            left_words: None,
            right_words: None,
        }
    }

    /// Line present only on the left.
    pub fn removed(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            display_line_number: 0,
            left_line_number: Some(line_number),
            right_line_number: None,
            left: Some(text.into()),
            right: None,
            kind: ChangeKind::Removed,
            left_words: None,
            right_words: None,
        }
    }

    /// Line present only on the right.
    pub fn added(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            display_line_number: 0,
            left_line_number: None,
            right_line_number: Some(line_number),
            left: None,
            right: Some(text.into()),
            kind: ChangeKind::Added,
            left_words: None,
            right_words: None,
        }
    }

    /// Smallest line number on either side, used for reading-order sorts.
    #[must_use]
    pub fn sort_key(&self) -> usize {
        match (self.left_line_number, self.right_line_number) {
            (Some(l), Some(r)) => l.min(r),
            (Some(n), None) | (None, Some(n)) => n,
            (None, None) => usize::MAX,
        }
    }
}

/// Type of a structural difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceKind {
    Added,
    Removed,
    Modified,
    AttributeChanged,
}

impl std::fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Removed => write!(f, "removed"),
            Self::Modified => write!(f, "modified"),
            Self::AttributeChanged => write!(f, "attribute changed"),
        }
    }
}

/// A typed, path-addressed record of a single structural change.
///
/// Paths are only stable within one comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difference {
    pub kind: DifferenceKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<serde_json::Value>,
    pub message: String,
}

impl Difference {
    pub fn new(kind: DifferenceKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            element: None,
            attribute: None,
            old_value: None,
            new_value: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    #[must_use]
    pub fn with_old_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.old_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_new_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.new_value = Some(value.into());
        self
    }
}

/// Complete result of one comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct CompareResult {
    pub are_equal: bool,
    pub differences: Vec<Difference>,
    pub differences_count: usize,
    pub diff_lines: Vec<DiffLine>,
    pub added_count: usize,
    pub removed_count: usize,
    pub modified_count: usize,
    pub has_parse_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_error_message: Option<String>,
}

impl CompareResult {
    /// Build a result from aligned lines and structural differences.
    ///
    /// Display line numbers are reassigned in order and the per-kind counts
    /// are derived from `diff_lines`.
    pub fn new(are_equal: bool, diff_lines: Vec<DiffLine>, differences: Vec<Difference>) -> Self {
        let mut result = Self {
            are_equal,
            differences,
            differences_count: 0,
            diff_lines,
            added_count: 0,
            removed_count: 0,
            modified_count: 0,
            has_parse_error: false,
            parse_error_message: None,
        };
        result.calculate_summary();
        result
    }

    /// Build a degraded result for inputs that failed to parse.
    pub fn parse_error(message: impl Into<String>, diff_lines: Vec<DiffLine>) -> Self {
        let mut result = Self::new(false, diff_lines, Vec::new());
        result.has_parse_error = true;
        result.parse_error_message = Some(message.into());
        result
    }

    /// Renumber display lines and recount line kinds.
    pub fn calculate_summary(&mut self) {
        for (index, line) in self.diff_lines.iter_mut().enumerate() {
            line.display_line_number = index + 1;
        }
        self.added_count = self.count_lines(ChangeKind::Added);
        self.removed_count = self.count_lines(ChangeKind::Removed);
        self.modified_count = self.count_lines(ChangeKind::Modified);
        self.differences_count = self.differences.len();
    }

    fn count_lines(&self, kind: ChangeKind) -> usize {
        self.diff_lines.iter().filter(|l| l.kind == kind).count()
    }

    /// Total number of changed lines.
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.added_count + self.removed_count + self.modified_count
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.are_equal
    }

    /// Lines that are not `Unchanged`.
    pub fn changed_lines(&self) -> impl Iterator<Item = &DiffLine> {
        self.diff_lines.iter().filter(|l| l.kind.is_change())
    }
}
