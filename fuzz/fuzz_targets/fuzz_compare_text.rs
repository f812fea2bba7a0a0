#![no_main]
use docdiff::{AlignmentStrategy, ComparisonOptions, ScanConfig, TextMode};
use docdiff::compare::compare_text_with;
use libfuzzer_sys::fuzz_target;

/// Fuzz both alignment strategies in word mode.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (left, right) = s.split_once('\0').unwrap_or((s, ""));
    for strategy in [AlignmentStrategy::Lcs, AlignmentStrategy::ForwardScan] {
        let _ = compare_text_with(
            left,
            right,
            &ComparisonOptions::default(),
            TextMode::Word,
            strategy,
            &ScanConfig::default(),
        );
    }
});
