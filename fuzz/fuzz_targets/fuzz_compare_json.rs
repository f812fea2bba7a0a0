#![no_main]
use docdiff::{ComparisonOptions, compare_json};
use libfuzzer_sys::fuzz_target;

/// Fuzz the JSON comparator.
///
/// The input is split on the first NUL byte into a left and right document.
/// Comparing must never panic, and a document must always equal itself.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (left, right) = s.split_once('\0').unwrap_or((s, s));
    let _ = compare_json(left, right, &ComparisonOptions::default());

    let lenient = ComparisonOptions::lenient();
    let result = compare_json(left, left, &lenient);
    assert!(result.has_parse_error || result.are_equal);
});
