//! Sequence alignment for lines and words.
//!
//! Two strategies are available:
//!
//! - [`LcsAligner`] (the default everywhere): exact LCS alignment followed by
//!   a merge step that turns a removal immediately followed by an addition
//!   into a single `Modified` pair.
//! - [`ForwardScanAligner`]: a bounded look-ahead heuristic for very large
//!   text inputs. Its thresholds live in [`ScanConfig`].
//!
//! Both produce [`AlignedPair`]s that index into the input sequences, so the
//! caller keeps ownership of the original (unnormalized) items for display.

mod lcs;
mod scan;
mod words;

pub use lcs::{lcs_pairs, merge_modified, LcsAligner};
pub use scan::{
    ForwardScanAligner, ScanConfig, DEFAULT_LOOKAHEAD_WINDOW, DEFAULT_SIMILARITY_SAMPLE,
    DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TAIL_GUARD,
};
pub use words::{diff_words, split_words, whole_line_words};

use crate::model::ChangeKind;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One step of an alignment: indexes into the left and/or right sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedPair {
    pub kind: ChangeKind,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl AlignedPair {
    #[must_use]
    pub const fn unchanged(left: usize, right: usize) -> Self {
        Self {
            kind: ChangeKind::Unchanged,
            left: Some(left),
            right: Some(right),
        }
    }

    #[must_use]
    pub const fn modified(left: usize, right: usize) -> Self {
        Self {
            kind: ChangeKind::Modified,
            left: Some(left),
            right: Some(right),
        }
    }

    #[must_use]
    pub const fn added(right: usize) -> Self {
        Self {
            kind: ChangeKind::Added,
            left: None,
            right: Some(right),
        }
    }

    #[must_use]
    pub const fn removed(left: usize) -> Self {
        Self {
            kind: ChangeKind::Removed,
            left: Some(left),
            right: None,
        }
    }
}

/// Strategy for aligning two sequences.
pub trait SequenceAligner {
    /// Align `left` against `right` using `eq` as the item equality.
    ///
    /// Every index of both sequences appears exactly once in the output, in
    /// increasing order per side.
    fn align<T, F>(&self, left: &[T], right: &[T], eq: F) -> Vec<AlignedPair>
    where
        F: Fn(&T, &T) -> bool;

    /// Strategy name for logging.
    fn name(&self) -> &'static str;
}

/// Selectable alignment strategy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentStrategy {
    /// Exact LCS alignment with Removed/Added merging
    #[default]
    Lcs,
    /// Bounded look-ahead scan for very large inputs
    ForwardScan,
}

impl std::fmt::Display for AlignmentStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lcs => write!(f, "lcs"),
            Self::ForwardScan => write!(f, "forward-scan"),
        }
    }
}

/// Align with the chosen strategy.
pub fn align_with<T, F>(
    strategy: AlignmentStrategy,
    scan: &ScanConfig,
    left: &[T],
    right: &[T],
    eq: F,
) -> Vec<AlignedPair>
where
    F: Fn(&T, &T) -> bool,
{
    match strategy {
        AlignmentStrategy::Lcs => LcsAligner.align(left, right, eq),
        AlignmentStrategy::ForwardScan => ForwardScanAligner::new(*scan).align(left, right, eq),
    }
}
