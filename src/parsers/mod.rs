//! Document format parsers.
//!
//! This module turns JSON and YAML documents into the generic
//! [`Node`](crate::model::Node) tree the diff engine works on.
//!
//! ## Format Detection
//!
//! - A `.json`, `.yaml` or `.yml` extension selects the parser directly
//! - Otherwise each parser reports a confidence score (0.0-1.0) for the content
//!   and the parser with the highest confidence is selected
//!
//! ## Usage
//!
//! ```no_run
//! use gendiff::parsers::{parse_document, detect_format};
//! use std::path::Path;
//!
//! let doc = parse_document(Path::new("config.yaml")).unwrap();
//!
//! let content = std::fs::read_to_string("settings").unwrap();
//! if let Some(format) = detect_format(&content) {
//!     println!("Detected: {format}");
//! }
//! ```

mod detection;
mod json;
mod traits;
mod yaml;

pub use detection::{DetectionResult, FormatDetector, MIN_CONFIDENCE_THRESHOLD};
pub use json::JsonParser;
pub use traits::{DocumentFormat, DocumentParser, FormatConfidence, FormatDetection, ParseError};
pub use yaml::YamlParser;

use crate::model::Node;
use std::path::Path;

/// Maximum document size (64 MB).
const MAX_DOCUMENT_SIZE: u64 = 64 * 1024 * 1024;

/// Detect the document format from content without parsing
///
/// Returns None if no format could be detected with sufficient confidence.
#[must_use]
pub fn detect_format(content: &str) -> Option<DocumentFormat> {
    let result = FormatDetector::new().detect_from_content(content);
    if result.can_parse() {
        result.format
    } else {
        None
    }
}

/// Read a document from disk and parse it.
///
/// The extension picks the format; unknown extensions fall back to content
/// detection. Returns an error if the file exceeds [`MAX_DOCUMENT_SIZE`].
pub fn parse_document(path: &Path) -> Result<Node, ParseError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_DOCUMENT_SIZE {
        return Err(ParseError::FileTooLarge {
            size_mb: metadata.len() / (1024 * 1024),
            limit_mb: MAX_DOCUMENT_SIZE / (1024 * 1024),
        });
    }
    let content = std::fs::read_to_string(path)?;
    FormatDetector::new().parse_file_content(path, &content)
}

/// Parse a document from string content.
///
/// With `format` set, that parser is used; otherwise the format is detected.
pub fn parse_document_str(content: &str, format: Option<DocumentFormat>) -> Result<Node, ParseError> {
    let detector = FormatDetector::new();
    match format {
        Some(format) => detector.parse_as(format, content),
        None => detector.parse_str(content),
    }
}
