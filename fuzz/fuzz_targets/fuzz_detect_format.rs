#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the format detection logic.
///
/// Exercises the confidence-based JSON/YAML detection without parsing.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = gendiff::parsers::detect_format(s);
    }
});
