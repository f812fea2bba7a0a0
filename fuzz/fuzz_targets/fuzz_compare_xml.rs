#![no_main]
use docdiff::{ComparisonOptions, compare_xml};
use libfuzzer_sys::fuzz_target;

/// Fuzz the XML comparator, including semantic line reconciliation.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (left, right) = s.split_once('\0').unwrap_or((s, s));
    for opts in [ComparisonOptions::default(), ComparisonOptions::lenient()] {
        let result = compare_xml(left, right, &opts);
        assert_eq!(
            result.change_count(),
            result.diff_lines.iter().filter(|l| l.kind.is_change()).count()
        );
    }
});
