//! Pipeline orchestration for document comparisons.
//!
//! This module provides shared orchestration logic for the
//! read → compare → report workflow used by the CLI.

mod compare_stage;
mod input;
mod report_stage;

pub use compare_stage::run_comparison;
pub use input::{is_stdin, read_input, read_pair, InputDocument, STDIN_PATH};
pub use report_stage::{output_report, render_report, OutputTarget};

use crate::model::CompareResult;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - documents are equal (or fail-on-change is off)
    pub const SUCCESS: i32 = 0;
    /// Differences were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// An input could not be parsed as its format
    pub const PARSE_ERROR: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Exit code for a finished comparison.
///
/// Without `fail_on_change` every completed comparison succeeds.
#[must_use]
pub const fn exit_code_for(result: &CompareResult, fail_on_change: bool) -> i32 {
    if !fail_on_change {
        exit_codes::SUCCESS
    } else if result.has_parse_error {
        exit_codes::PARSE_ERROR
    } else if result.are_equal {
        exit_codes::SUCCESS
    } else {
        exit_codes::CHANGES_DETECTED
    }
}
