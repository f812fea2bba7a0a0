//! Comparison stage.
//!
//! Builds a [`Comparator`] from the application configuration and runs it
//! on two loaded inputs.

use super::InputDocument;
use crate::compare::Comparator;
use crate::config::AppConfig;
use crate::model::{CompareResult, DocumentFormat};
use crate::parsers::detect_pair_format;

/// Compare two documents as `format`, or as the detected format when `None`.
///
/// Returns the result together with the format actually used.
pub fn run_comparison(
    config: &AppConfig,
    left: &InputDocument,
    right: &InputDocument,
    format: Option<DocumentFormat>,
) -> (CompareResult, DocumentFormat) {
    let quiet = config.behavior.quiet;
    let format = format.unwrap_or_else(|| {
        let detected = detect_pair_format(&left.content, &right.content);
        if !quiet {
            tracing::info!("Detected {} input", detected);
        }
        detected
    });

    let comparator = Comparator::new()
        .with_strategy(config.alignment.strategy)
        .with_scan_config(config.alignment.scan)
        .with_text_mode(config.alignment.text_mode);

    let result = comparator.compare(&left.content, &right.content, &config.comparison, format);

    if !quiet {
        if result.has_parse_error {
            tracing::warn!(
                "{}",
                result
                    .parse_error_message
                    .as_deref()
                    .unwrap_or("input could not be parsed")
            );
        } else {
            tracing::info!(
                "Compared {} vs {}: {} added, {} removed, {} modified, {} difference(s)",
                left.name,
                right.name,
                result.added_count,
                result.removed_count,
                result.modified_count,
                result.differences_count
            );
        }
    }

    (result, format)
}
