#![no_main]
use gendiff::parsers::parse_document_str;
use gendiff::reports::{create_reporter, ReportConfig, ReportFormat};
use gendiff::DiffEngine;
use libfuzzer_sys::fuzz_target;

/// Fuzz the diff engine and reporters.
///
/// Input is split on the first NUL byte into two documents. Whatever parses
/// is compared, and the diff is rendered in every format.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Some((left, right)) = s.split_once('\0') else {
        return;
    };
    let (Ok(left), Ok(right)) = (parse_document_str(left, None), parse_document_str(right, None))
    else {
        return;
    };

    let Ok(diff) = DiffEngine::new().compare(&left, &right) else {
        return;
    };
    assert_eq!(
        DiffEngine::new().compare(&right, &left).ok(),
        Some(diff.inverted())
    );

    let config = ReportConfig::default();
    for format in [
        ReportFormat::Stylish,
        ReportFormat::Plain,
        ReportFormat::Json,
        ReportFormat::Summary,
    ] {
        let _ = create_reporter(format).generate(&diff, &config);
    }
});
