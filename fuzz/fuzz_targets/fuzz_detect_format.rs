#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the content-based format detection heuristics.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = docdiff::parsers::detect_format(s);
        let _ = docdiff::parsers::looks_like_xml(s);
    }
});
