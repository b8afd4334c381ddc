#![no_main]
use gendiff::parsers::{parse_document_str, DocumentFormat};
use libfuzzer_sys::fuzz_target;

/// Fuzz the document parsing entry point.
///
/// Feeds arbitrary UTF-8 strings through detection and through each parser
/// directly, covering number conversion, key stringification and the
/// duplicate-key check.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_document_str(s, None);
        let _ = parse_document_str(s, Some(DocumentFormat::Json));
        let _ = parse_document_str(s, Some(DocumentFormat::Yaml));
    }
});
